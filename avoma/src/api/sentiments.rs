use log::*;
use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::{HttpClient, IntoQueryParams};
use crate::pagination;
use crate::schema::{validate, validate_single};
use crate::types::sentiment;

/// `/sentiments`: per-meeting sentiment analyses.
pub struct Sentiments<'a> {
    http: &'a HttpClient,
}

impl<'a> Sentiments<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &sentiment::Query) -> Result<sentiment::List, Error> {
        let params = query.into_query_params()?;
        pagination::list(self.http, "sentiments", &params, query.follow_pagination).await
    }

    /// The analysis of one meeting. A one-element array response is unwrapped;
    /// an empty array is an error.
    pub async fn get(&self, meeting_uuid: Uuid) -> Result<sentiment::MeetingSentiment, Error> {
        validate_single(
            self.http
                .request(
                    Method::GET,
                    &format!("sentiments/{}", meeting_uuid),
                    None,
                    None,
                )
                .await?,
        )
    }

    /// Requests (re)analysis of a meeting.
    pub async fn analyze(
        &self,
        meeting_uuid: Uuid,
    ) -> Result<sentiment::MeetingSentiment, Error> {
        info!("Requesting sentiment analysis for meeting {}", meeting_uuid);
        validate(
            self.http
                .request(
                    Method::POST,
                    &format!("sentiments/{}/analyze", meeting_uuid),
                    None,
                    None,
                )
                .await?,
        )
    }
}
