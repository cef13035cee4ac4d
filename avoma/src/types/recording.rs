//! Types for downloadable meeting recordings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Audio/video download links for a meeting.
///
/// The URLs are pre-signed and stop working after `valid_till`; fetch the
/// recording again for fresh links instead of caching them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub uuid: Uuid,
    pub meeting_uuid: Uuid,
    #[serde(default)]
    pub audio_url: Option<Url>,
    #[serde(default)]
    pub video_url: Option<Url>,
    #[serde(default)]
    pub valid_till: Option<DateTime<Utc>>,
    /// Set by the server when the media is not (yet) available.
    #[serde(default)]
    pub message: Option<String>,
}

impl Recording {
    /// Whether the download links can still be used at `at`.
    ///
    /// Links without an expiry are treated as valid.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.valid_till.map_or(true, |valid_till| at < valid_till)
    }
}
