use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::{HttpClient, QueryParams};
use crate::schema::{validate, validate_single};
use crate::types::recording::Recording;

/// `/recordings`: download links for meeting media.
pub struct Recordings<'a> {
    http: &'a HttpClient,
}

impl<'a> Recordings<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// The recording of a meeting, looked up by meeting uuid.
    pub async fn get_by_meeting(&self, meeting_uuid: Uuid) -> Result<Recording, Error> {
        let mut params = QueryParams::new();
        params.insert("meeting_uuid", meeting_uuid);
        validate_single(
            self.http
                .request(Method::GET, "recordings", Some(&params), None)
                .await?,
        )
    }

    pub async fn get(&self, uuid: Uuid) -> Result<Recording, Error> {
        validate(
            self.http
                .request(Method::GET, &format!("recordings/{}", uuid), None, None)
                .await?,
        )
    }
}
