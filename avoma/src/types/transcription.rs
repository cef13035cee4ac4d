//! Types for time-aligned meeting transcripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::meeting::Speaker;
use crate::error::Error;
use crate::http::{DateRange, IntoQueryParams, QueryParams};

/// Speech-to-text output for one meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub uuid: Uuid,
    pub transcript: Vec<Segment>,
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub transcription_vtt_url: Option<Url>,
}

impl Transcription {
    /// Looks up the speaker attributed to a segment.
    pub fn speaker_for(&self, segment: &Segment) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == segment.speaker_id)
    }
}

/// A contiguous utterance; `timestamps` are word offsets in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub transcript: String,
    pub timestamps: Vec<f64>,
    pub speaker_id: i64,
}

/// Filters for the transcriptions listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub range: DateRange,
    pub meeting_uuid: Option<Uuid>,
}

impl Query {
    pub fn new(from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        Self {
            range: DateRange::new(from_date, to_date),
            meeting_uuid: None,
        }
    }

    pub fn with_meeting(mut self, meeting_uuid: Uuid) -> Self {
        self.meeting_uuid = Some(meeting_uuid);
        self
    }
}

impl IntoQueryParams for &Query {
    fn into_query_params(self) -> Result<QueryParams, Error> {
        let mut params = QueryParams::new();
        self.range.append_to(&mut params)?;
        params.insert_opt("meeting_uuid", self.meeting_uuid);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    #[test]
    fn test_speaker_for_resolves_segment_speaker() {
        let transcription: Transcription = validate(json!({
            "uuid": "123e4567-e89b-12d3-a456-426614174000",
            "transcript": [
                {"transcript": "Hello, how are you?", "timestamps": [0.0, 0.5], "speaker_id": 1},
                {"transcript": "Fine, thanks.", "timestamps": [2.0], "speaker_id": 7}
            ],
            "speakers": [
                {"email": "speaker@example.com", "id": 1, "is_rep": true, "name": "Test Speaker"}
            ]
        }))
        .unwrap();

        let first = transcription.speaker_for(&transcription.transcript[0]).unwrap();
        assert_eq!(first.name.as_deref(), Some("Test Speaker"));
        assert!(transcription.speaker_for(&transcription.transcript[1]).is_none());
        assert_eq!(transcription.transcription_vtt_url, None);
    }
}
