use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::{HttpClient, IntoQueryParams};
use crate::schema::validate;
use crate::types::transcription::{self, Transcription};

/// `/transcriptions`. The listing is a bare array, not a paginated envelope.
pub struct Transcriptions<'a> {
    http: &'a HttpClient,
}

impl<'a> Transcriptions<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &transcription::Query) -> Result<Vec<Transcription>, Error> {
        let params = query.into_query_params()?;
        validate(
            self.http
                .request(Method::GET, "transcriptions", Some(&params), None)
                .await?,
        )
    }

    pub async fn get(&self, uuid: Uuid) -> Result<Transcription, Error> {
        validate(
            self.http
                .request(Method::GET, &format!("transcriptions/{}", uuid), None, None)
                .await?,
        )
    }
}
