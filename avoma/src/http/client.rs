//! The single request primitive every resource module goes through.

use std::time::Duration;

use log::*;
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use super::QueryParams;
use crate::auth::BearerToken;
use crate::error::{config_error, status_error, ConfigErrorKind, Error, ErrorKind, ValidationErrorKind};

/// Production endpoint of the Avoma public API.
pub const DEFAULT_BASE_URL: &str = "https://api.avoma.com/v1/";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("avoma-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Build the underlying reqwest client.
    pub(crate) fn build(&self) -> Result<reqwest::Client, Error> {
        Ok(reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?)
    }
}

/// Shared connection handle plus the credentials and base URL it talks to.
///
/// Built once by the client facade and shared by every resource module. Nothing
/// in here is mutated after construction, so it is safe to use from concurrent
/// tasks; reqwest pools connections internally.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    auth: BearerToken,
}

impl HttpClient {
    pub(crate) fn new(client: reqwest::Client, base_url: Url, auth: BearerToken) -> Self {
        Self {
            client,
            base_url,
            auth,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a relative path against the base URL, or returns an already
    /// absolute http(s) URL untouched (e.g. a pagination `next` link).
    pub fn resolve(&self, path_or_url: &str) -> Result<Url, Error> {
        if let Ok(url) = Url::parse(path_or_url) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        self.base_url
            .join(path_or_url.trim_start_matches('/'))
            .map_err(|err| Error {
                source: Some(Box::new(err)),
                error_kind: ErrorKind::Config(ConfigErrorKind::BaseUrl),
            })
    }

    /// Issues one request and returns the parsed JSON body.
    ///
    /// Non-success statuses fail with [`ErrorKind::Status`] carrying the code and
    /// raw body. An empty success body yields an empty JSON object.
    pub async fn request(
        &self,
        method: Method,
        path_or_url: &str,
        params: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.resolve(path_or_url)?;

        debug!("{} {}", method, url);

        let mut request = self.auth.authenticate(self.client.request(method.clone(), url.clone()));
        if let Some(params) = params.filter(|p| !p.is_empty()) {
            request = request.query(params.as_pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Failed to send {} {}: {:?}", method, url, e);
            Error::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Avoma API error on {} {}: {} {}", method, url, status, error_text);
            return Err(status_error(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Avoma API returned a non-JSON body for {} {}: {:?}", method, url, e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::Validation(ValidationErrorKind::Schema {
                    path: ".".to_string(),
                }),
            }
        })
    }
}

/// Parses a base URL, requiring http(s) and a trailing slash so that relative
/// resource paths are appended to it rather than replacing its last segment.
pub fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|err| Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::Config(ConfigErrorKind::BaseUrl),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(config_error(
            ConfigErrorKind::BaseUrl,
            &format!("unsupported base URL scheme: {}", url.scheme()),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
