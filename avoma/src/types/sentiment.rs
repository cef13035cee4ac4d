//! Types for sentiment analysis over a meeting and its segments.
//!
//! Every score follows one shape: a numeric `score`, a coarse [`Label`] and
//! the model's `confidence`. Analyses are listed, fetched and requested
//! per meeting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::MAX_PAGE_SIZE;
use crate::error::Error;
use crate::http::params::append_page_size;
use crate::http::{DateRange, IntoQueryParams, QueryParams};
use crate::pagination::PaginatedResponse;

/// Emotional tone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub score: f64,
    pub label: Label,
    pub confidence: f64,
}

/// Sentiment of one speaker turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    /// Seconds from the start of the recording.
    pub start_time: f64,
    pub end_time: f64,
    pub speaker: String,
    pub sentiment: Score,
}

/// Sentiment analysis of a whole meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSentiment {
    pub uuid: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub overall_sentiment: Score,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl MeetingSentiment {
    /// Segments whose label matches, in transcript order.
    pub fn segments_labelled(&self, label: Label) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(move |s| s.sentiment.label == label)
    }
}

pub type List = PaginatedResponse<MeetingSentiment>;

/// Filters for the sentiments listing. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub range: Option<DateRange>,
    pub meeting_uuid: Option<Uuid>,
    pub page_size: Option<u32>,
    pub follow_pagination: bool,
}

impl Query {
    pub fn with_range(mut self, from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        self.range = Some(DateRange::new(from_date, to_date));
        self
    }

    pub fn with_meeting(mut self, meeting_uuid: Uuid) -> Self {
        self.meeting_uuid = Some(meeting_uuid);
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
        if let Some(range) = &self.range {
            range.append_to(&mut params)?;
        }
        params.insert_opt("meeting_uuid", self.meeting_uuid);
        append_page_size(&mut params, self.page_size, self.follow_pagination, MAX_PAGE_SIZE)?;
        Ok(params)
    }
}
