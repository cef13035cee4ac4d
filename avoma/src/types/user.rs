//! Types for workspace users and their roles.

use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::MAX_PAGE_SIZE;
use crate::error::Error;
use crate::http::params::append_page_size;
use crate::http::{IntoQueryParams, QueryParams};
use crate::pagination::PaginatedResponse;
use crate::schema::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// A member of the Avoma workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: Uuid,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub role: Role,
    pub is_active: bool,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// IANA zone name, e.g. `America/Los_Angeles`.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub type List = PaginatedResponse<User>;

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Create {
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub role_uuid: Uuid,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub timezone: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub department: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
}

impl Create {
    pub fn new(
        email: EmailAddress,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role_uuid: Uuid,
    ) -> Self {
        Self {
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role_uuid,
            timezone: Field::Unset,
            department: Field::Unset,
            title: Field::Unset,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Field::Set(timezone.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Field::Set(department.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Field::Set(title.into());
        self
    }
}

/// Body of `PUT`/`PATCH /users/{uuid}`.
///
/// `Field::Null` clears a value on the server; `Field::Unset` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<EmailAddress>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub role_uuid: Field<Uuid>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub is_active: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub timezone: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub department: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
}

/// Paging options for the users listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub page_size: Option<u32>,
    pub follow_pagination: bool,
}

impl Query {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_follow_pagination(mut self, follow: bool) -> Self {
        self.follow_pagination = follow;
        self
    }
}

impl IntoQueryParams for &Query {
    fn into_query_params(self) -> Result<QueryParams, Error> {
        let mut params = QueryParams::new();
        append_page_size(&mut params, self.page_size, self.follow_pagination, MAX_PAGE_SIZE)?;
        Ok(params)
    }
}
