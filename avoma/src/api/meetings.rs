use log::*;
use reqwest::Method;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::Error;
use crate::http::{HttpClient, IntoQueryParams, QueryParams};
use crate::pagination;
use crate::schema::{to_body, validate, validate_single};
use crate::types::meeting;

/// `/meetings` and the per-meeting insight and sentiment views.
pub struct Meetings<'a> {
    http: &'a HttpClient,
}

impl<'a> Meetings<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists meetings in a date range. With `follow_pagination` set every page
    /// is fetched and merged.
    pub async fn list(&self, query: &meeting::Query) -> Result<meeting::List, Error> {
        let params = query.into_query_params()?;
        debug!("Listing meetings with {} params", params.len());
        pagination::list(self.http, "meetings", &params, query.follow_pagination).await
    }

    pub async fn get(&self, uuid: Uuid) -> Result<meeting::Meeting, Error> {
        validate(
            self.http
                .request(Method::GET, &format!("meetings/{}", uuid), None, None)
                .await?,
        )
    }

    pub async fn create(&self, meeting: &meeting::Create) -> Result<meeting::Meeting, Error> {
        let body = to_body(meeting)?;
        validate(
            self.http
                .request(Method::POST, "meetings", None, Some(&body))
                .await?,
        )
    }

    pub async fn get_insights(&self, uuid: Uuid) -> Result<meeting::Insights, Error> {
        validate_single(
            self.http
                .request(
                    Method::GET,
                    &format!("meetings/{}/insights", uuid),
                    None,
                    None,
                )
                .await?,
        )
    }

    /// Meeting-level sentiment. The server may wrap the record in a
    /// one-element array; an empty array is an error.
    pub async fn get_sentiments(&self, uuid: Uuid) -> Result<meeting::Sentiment, Error> {
        let mut params = QueryParams::new();
        params.insert("uuid", uuid);
        validate_single(
            self.http
                .request(Method::GET, "meeting_sentiments", Some(&params), None)
                .await?,
        )
    }

    /// Drops a meeting and returns the server's message object unchanged.
    pub async fn drop(&self, uuid: Uuid) -> Result<Map<String, Value>, Error> {
        info!("Dropping meeting {}", uuid);
        validate(
            self.http
                .request(Method::POST, &format!("meetings/{}/drop/", uuid), None, None)
                .await?,
        )
    }
}
