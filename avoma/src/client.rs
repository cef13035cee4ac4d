//! The client facade: owns the HTTP session and hands out the resource APIs.

use std::time::Duration;

use log::*;
use serde::de::DeserializeOwned;

use crate::api::{
    Calls, Meetings, Notes, Recordings, Sentiments, SmartCategories, Templates, Transcriptions,
    Users,
};
use crate::auth::BearerToken;
use crate::error::Error;
use crate::http::{normalize_base_url, HttpClient, HttpClientConfig, DEFAULT_BASE_URL};
use crate::pagination::{self, PaginatedResponse};

/// Entry point to the Avoma API.
///
/// Cheap to clone; clones share the underlying connection pool. The session is
/// built once, when the client is constructed.
#[derive(Debug, Clone)]
pub struct AvomaClient {
    http: HttpClient,
}

impl AvomaClient {
    /// Client for the production endpoint with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &url::Url {
        self.http.base_url()
    }

    pub fn meetings(&self) -> Meetings<'_> {
        Meetings::new(&self.http)
    }

    pub fn calls(&self) -> Calls<'_> {
        Calls::new(&self.http)
    }

    pub fn recordings(&self) -> Recordings<'_> {
        Recordings::new(&self.http)
    }

    pub fn transcriptions(&self) -> Transcriptions<'_> {
        Transcriptions::new(&self.http)
    }

    pub fn sentiments(&self) -> Sentiments<'_> {
        Sentiments::new(&self.http)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.http)
    }

    pub fn notes(&self) -> Notes<'_> {
        Notes::new(&self.http)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.http)
    }

    pub fn smart_categories(&self) -> SmartCategories<'_> {
        SmartCategories::new(&self.http)
    }

    /// Fetches the page after `page`, using its `next` link verbatim.
    ///
    /// Returns `Ok(None)` on the last page.
    pub async fn next_page<T: DeserializeOwned>(
        &self,
        page: &PaginatedResponse<T>,
    ) -> Result<Option<PaginatedResponse<T>>, Error> {
        match &page.next {
            Some(url) => Ok(Some(pagination::fetch_page(&self.http, url).await?)),
            None => Ok(None),
        }
    }
}

/// Builder for [`AvomaClient`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    config: HttpClientConfig,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            config: HttpClientConfig::default(),
            http_client: None,
        }
    }

    /// Point the client at another deployment (or a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use an existing reqwest client. Timeout and user agent set on this
    /// builder are ignored in that case.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validate the settings and build the client.
    pub fn build(self) -> Result<AvomaClient, Error> {
        let auth = BearerToken::new(self.api_key)?;
        let base_url = normalize_base_url(&self.base_url)?;
        let client = match self.http_client {
            Some(client) => client,
            None => self.config.build()?,
        };

        debug!("Avoma client targeting {}", base_url);

        Ok(AvomaClient {
            http: HttpClient::new(client, base_url, auth),
        })
    }
}

#[cfg(test)]
pub(crate) fn test_client(base_url: &str) -> AvomaClient {
    ClientBuilder::new("test-api-key")
        .with_base_url(base_url)
        .build()
        .unwrap()
}
