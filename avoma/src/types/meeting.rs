//! Types for meetings and the insight/sentiment views derived from them.

use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use super::common::MeetingAttribute;
use crate::error::Error;
use crate::http::params::append_page_size;
use crate::http::{DateRange, IntoQueryParams, QueryParams};
use crate::pagination::PaginatedResponse;
use crate::schema::Field;

/// Largest `page_size` accepted by the meetings listing.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A recorded conversation and the readiness of its derived artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub uuid: Uuid,
    pub subject: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub is_private: bool,
    pub is_internal: bool,
    pub organizer_email: EmailAddress,
    pub state: String,
    pub attendees: Vec<Attendee>,
    pub audio_ready: bool,
    #[serde(default)]
    pub call_details: Option<CallDetails>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    pub is_call: bool,
    pub notes_ready: bool,
    #[serde(default)]
    pub outcome: Option<MeetingAttribute>,
    #[serde(default)]
    pub processing_status: Option<String>,
    #[serde(default)]
    pub purpose: Option<MeetingAttribute>,
    #[serde(default)]
    pub recording_uuid: Option<Uuid>,
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    pub transcript_ready: bool,
    #[serde(default)]
    pub transcription_uuid: Option<Uuid>,
    #[serde(default, rename = "type")]
    pub meeting_type: Option<MeetingAttribute>,
    #[serde(default)]
    pub url: Option<Url>,
    pub video_ready: bool,
}

impl Meeting {
    /// Whether audio, video, transcript and notes are all available.
    pub fn is_fully_processed(&self) -> bool {
        self.audio_ready && self.video_ready && self.transcript_ready && self.notes_ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub email: EmailAddress,
    #[serde(default)]
    pub name: Option<String>,
    pub response_status: String,
    pub uuid: Uuid,
}

/// Telephony metadata present when the meeting was a dialed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDetails {
    pub external_id: String,
    pub frm: String,
    pub to: String,
}

pub type List = PaginatedResponse<Meeting>;

/// AI generated notes, keyword hits and speaker roster for one meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub ai_notes: Vec<AiNote>,
    #[serde(default)]
    pub keywords: Map<String, Value>,
    pub speakers: Vec<Speaker>,
}

impl Insights {
    pub fn speaker(&self, id: i64) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiNote {
    pub note_type: String,
    pub uuid: Uuid,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub speaker_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub email: EmailAddress,
    pub id: i64,
    pub is_rep: bool,
    #[serde(default)]
    pub name: Option<String>,
}

/// Meeting-level sentiment as served by `/meeting_sentiments`.
///
/// `sentiment` is the server's coarse overall score; ranges carry a score for
/// each `[start, end]` window in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub sentiment: i64,
    pub sentiment_ranges: Vec<SentimentRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRange {
    pub score: f64,
    pub time_range: (f64, f64),
}

/// Body of `POST /meetings`. Unset optional fields are left out of the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Create {
    pub subject: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub organizer_email: EmailAddress,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attendee_emails: Field<Vec<EmailAddress>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub is_private: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub is_internal: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub url: Field<Url>,
}

impl Create {
    pub fn new(
        subject: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        organizer_email: EmailAddress,
    ) -> Self {
        Self {
            subject: subject.into(),
            start_at,
            end_at,
            organizer_email,
            attendee_emails: Field::Unset,
            is_private: Field::Unset,
            is_internal: Field::Unset,
            url: Field::Unset,
        }
    }

    pub fn with_attendees(mut self, attendee_emails: Vec<EmailAddress>) -> Self {
        self.attendee_emails = attendee_emails.into();
        self
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = is_private.into();
        self
    }

    pub fn with_internal(mut self, is_internal: bool) -> Self {
        self.is_internal = is_internal.into();
        self
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url.into();
        self
    }
}

/// Filters for the meetings listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub range: DateRange,
    pub page_size: Option<u32>,
    pub is_call: Option<bool>,
    pub is_internal: Option<bool>,
    /// Minimum recording length in seconds.
    pub recording_duration_gte: Option<f64>,
    pub follow_pagination: bool,
}

impl Query {
    pub fn new(from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        Self {
            range: DateRange::new(from_date, to_date),
            page_size: None,
            is_call: None,
            is_internal: None,
            recording_duration_gte: None,
            follow_pagination: false,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_is_call(mut self, is_call: bool) -> Self {
        self.is_call = Some(is_call);
        self
    }

    pub fn with_is_internal(mut self, is_internal: bool) -> Self {
        self.is_internal = Some(is_internal);
        self
    }

    pub fn with_min_recording_duration(mut self, seconds: f64) -> Self {
        self.recording_duration_gte = Some(seconds);
        self
    }

    /// Fetch every page instead of only the first one.
    pub fn with_follow_pagination(mut self, follow: bool) -> Self {
        self.follow_pagination = follow;
        self
    }
}

impl IntoQueryParams for &Query {
    fn into_query_params(self) -> Result<QueryParams, Error> {
        let mut params = QueryParams::new();
        self.range.append_to(&mut params)?;
        append_page_size(&mut params, self.page_size, self.follow_pagination, MAX_PAGE_SIZE)?;
        params.insert_opt("is_call", self.is_call);
        params.insert_opt("is_internal", self.is_internal);
        params.insert_opt("recording_duration__gte", self.recording_duration_gte);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{to_body, validate};
    use chrono::TimeZone;
    use serde_json::json;

    fn query() -> Query {
        Query::new(
            Utc.with_ymd_and_hms(2024, 2, 14, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 14, 23, 59, 59).unwrap(),
        )
    }

    #[test]
    fn test_query_omits_unset_filters() {
        let params = query().into_query_params().unwrap();

        assert_eq!(params.len(), 2);
        assert!(!params.contains_key("page_size"));
        assert!(!params.contains_key("is_call"));
        assert!(!params.contains_key("recording_duration__gte"));
    }

    #[test]
    fn test_query_sends_set_filters() {
        let params = query()
            .with_is_internal(false)
            .with_min_recording_duration(60.0)
            .with_page_size(50)
            .into_query_params()
            .unwrap();

        assert_eq!(params.get("is_internal"), Some("false"));
        assert_eq!(params.get("recording_duration__gte"), Some("60"));
        assert_eq!(params.get("page_size"), Some("50"));
    }

    #[test]
    fn test_query_rejects_page_size_over_max() {
        assert!(query().with_page_size(101).into_query_params().is_err());
    }

    #[test]
    fn test_attendee_with_invalid_email_fails_validation() {
        let err = validate::<Attendee>(json!({
            "email": "not an email",
            "response_status": "accepted",
            "uuid": "123e4567-e89b-12d3-a456-426614174001"
        }))
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_create_body_omits_unset_fields() {
        let create = Create::new(
            "Pipeline review",
            Utc.with_ymd_and_hms(2024, 2, 15, 15, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 15, 15, 30, 0).unwrap(),
            "owner@example.com".parse().unwrap(),
        )
        .with_internal(true);

        assert_eq!(
            to_body(&create).unwrap(),
            json!({
                "subject": "Pipeline review",
                "start_at": "2024-02-15T15:00:00Z",
                "end_at": "2024-02-15T15:30:00Z",
                "organizer_email": "owner@example.com",
                "is_internal": true
            })
        );
    }

    #[test]
    fn test_sentiment_range_reads_time_window() {
        let sentiment: Sentiment = validate(json!({
            "sentiment": 1,
            "sentiment_ranges": [{"score": 0.8, "time_range": [0.0, 10.0]}]
        }))
        .unwrap();

        assert_eq!(sentiment.sentiment_ranges[0].time_range, (0.0, 10.0));
    }
}
