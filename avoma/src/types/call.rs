//! Types for scheduled calls and their server-driven lifecycle.

use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::common::MAX_PAGE_SIZE;
use crate::error::Error;
use crate::http::params::append_page_size;
use crate::http::{DateRange, IntoQueryParams, QueryParams, ToQueryValue};
use crate::pagination::PaginatedResponse;
use crate::schema::Field;

/// Lifecycle state of a call.
///
/// Calls move `Scheduled → InProgress → Completed`, or to `Cancelled` from
/// any state before completion. Transitions happen server side; the client
/// only requests them and reflects the returned state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Scheduled => "scheduled",
            State::InProgress => "in_progress",
            State::Completed => "completed",
            State::Cancelled => "cancelled",
        }
    }

    /// No further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Completed | State::Cancelled)
    }
}

impl ToQueryValue for State {
    fn to_query_value(&self) -> String {
        self.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub state: State,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Elapsed seconds, once the call has ended.
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub uuid: Uuid,
    pub email: EmailAddress,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
}

/// A schedulable phone or video session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub uuid: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub scheduled_start: DateTime<Utc>,
    /// Planned length in minutes.
    pub scheduled_duration: u32,
    pub status: Status,
    pub participants: Vec<Participant>,
    pub host: Participant,
    #[serde(default)]
    pub meeting_url: Option<Url>,
    pub recording_available: bool,
    pub transcription_available: bool,
    #[serde(default)]
    pub integration_type: Option<String>,
}

pub type List = PaginatedResponse<Call>;

/// Body of `POST /calls`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Create {
    pub title: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_duration: u32,
    pub host_email: EmailAddress,
    pub participant_emails: Vec<EmailAddress>,
    /// Conferencing provider, e.g. `zoom`, `teams` or `google_meet`.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub integration_type: Field<String>,
}

impl Create {
    pub fn new(
        title: impl Into<String>,
        scheduled_start: DateTime<Utc>,
        scheduled_duration: u32,
        host_email: EmailAddress,
    ) -> Self {
        Self {
            title: title.into(),
            description: Field::Unset,
            scheduled_start,
            scheduled_duration,
            host_email,
            participant_emails: Vec::new(),
            integration_type: Field::Unset,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Field::Set(description.into());
        self
    }

    pub fn with_participants(mut self, participant_emails: Vec<EmailAddress>) -> Self {
        self.participant_emails = participant_emails;
        self
    }

    pub fn with_integration_type(mut self, integration_type: impl Into<String>) -> Self {
        self.integration_type = Field::Set(integration_type.into());
        self
    }
}

/// Body of `PUT /calls/{uuid}`. Only the fields that were set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub scheduled_start: Field<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub scheduled_duration: Field<u32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub participant_emails: Field<Vec<EmailAddress>>,
}

/// Filters for the calls listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub range: DateRange,
    pub host_email: Option<EmailAddress>,
    pub participant_email: Option<EmailAddress>,
    pub status: Option<State>,
    pub page_size: Option<u32>,
    pub follow_pagination: bool,
}

impl Query {
    pub fn new(from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        Self {
            range: DateRange::new(from_date, to_date),
            host_email: None,
            participant_email: None,
            status: None,
            page_size: None,
            follow_pagination: false,
        }
    }

    pub fn with_host(mut self, host_email: EmailAddress) -> Self {
        self.host_email = Some(host_email);
        self
    }

    pub fn with_participant(mut self, participant_email: EmailAddress) -> Self {
        self.participant_email = Some(participant_email);
        self
    }

    pub fn with_status(mut self, status: State) -> Self {
        self.status = Some(status);
        self
    }

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
        self.range.append_to(&mut params)?;
        params.insert_opt("host_email", self.host_email.as_ref().map(EmailAddress::as_str));
        params.insert_opt(
            "participant_email",
            self.participant_email.as_ref().map(EmailAddress::as_str),
        );
        params.insert_opt("status", self.status);
        append_page_size(&mut params, self.page_size, self.follow_pagination, MAX_PAGE_SIZE)?;
        Ok(params)
    }
}
