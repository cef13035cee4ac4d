//! Types for note templates.

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::MeetingAttribute;
use crate::schema::Field;

/// A reusable note structure bound to meeting types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub uuid: Uuid,
    pub name: String,
    pub privacy: String,
    #[serde(default)]
    pub meeting_types: Vec<MeetingAttribute>,
    /// Owner, absent for organization-wide templates.
    #[serde(default)]
    pub email: Option<EmailAddress>,
}

/// Body of `POST /template`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Create {
    pub name: String,
    /// Smart category uuids, in the order their sections should appear.
    pub categories: Vec<Uuid>,
    pub meeting_type_uuids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub privacy: Field<String>,
}

/// Body of `PUT /template`; the template is identified by `uuid` in the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update {
    pub uuid: Uuid,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub categories: Field<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub meeting_type_uuids: Field<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub privacy: Field<String>,
}

impl Update {
    pub fn new(uuid: Uuid) -> Self {
        Self {
            uuid,
            name: Field::Unset,
            categories: Field::Unset,
            meeting_type_uuids: Field::Unset,
            privacy: Field::Unset,
        }
    }
}
