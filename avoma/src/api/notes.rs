use crate::error::Error;
use crate::http::{HttpClient, IntoQueryParams};
use crate::pagination;
use crate::types::note;

/// `/notes`: meeting notes in the requested output format.
pub struct Notes<'a> {
    http: &'a HttpClient,
}

impl<'a> Notes<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &note::Query) -> Result<note::List, Error> {
        let params = query.into_query_params()?;
        pagination::list(self.http, "notes", &params, query.follow_pagination).await
    }
}
