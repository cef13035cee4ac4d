//! Bearer token authentication for the Avoma API.

use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{config_error, ConfigErrorKind, Error};

/// The API key sent as `Authorization: Bearer <key>` on every request.
///
/// The key is held as a [`SecretString`] so it never shows up in `Debug` output
/// or logs. It is immutable for the lifetime of the client; there is no refresh.
#[derive(Clone)]
pub struct BearerToken {
    token: SecretString,
}

impl BearerToken {
    /// Create a new bearer token, rejecting keys that cannot travel in a header.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            return Err(config_error(ConfigErrorKind::ApiKey, "API key is empty"));
        }
        HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|err| Error {
            source: Some(Box::new(err)),
            error_kind: crate::error::ErrorKind::Config(ConfigErrorKind::ApiKey),
        })?;

        Ok(Self {
            token: SecretString::new(api_key),
        })
    }

    /// Apply authentication to a request builder.
    pub fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.token.expose_secret())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
