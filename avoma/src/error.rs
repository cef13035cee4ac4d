//! Error types for the `avoma` crate.
//!
//! Follows the same pattern as the other workspace crates: a root `Error` struct
//! holding an `error_kind` tree and an optional `source` for error chaining.
//! Nothing is retried or reclassified here; every failure reaches the caller
//! with enough context (status code, raw body, field path) to act on it.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the Avoma client.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors raised by the client.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The server answered with a non-success status. Auth, rate-limit and
    /// not-found failures all land here and differ only by `status`.
    Status { status: u16, body: String },
    /// The request never produced a response (DNS, connect, timeout, ...).
    Transport(TransportErrorKind),
    /// A response or query object did not match its declared shape.
    Validation(ValidationErrorKind),
    /// A request body could not be encoded as JSON.
    Serialization,
    /// The client could not be constructed from the given settings.
    Config(ConfigErrorKind),
}

/// Errors from the underlying HTTP transport.
#[derive(Debug, PartialEq)]
pub enum TransportErrorKind {
    Builder,
    Connect,
    Timeout,
    Request,
    Body,
}

/// Errors from response or query validation.
#[derive(Debug, PartialEq)]
pub enum ValidationErrorKind {
    /// Response body does not match the record schema; `path` points at the
    /// offending field (`results[3].uuid`, `.` for the document root).
    Schema { path: String },
    /// A single record was expected but the server returned an empty array.
    Empty,
    /// A query object failed its checks before any request was sent.
    Query,
}

/// Errors from client construction.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    BaseUrl,
    ApiKey,
}

impl Error {
    /// The HTTP status code, when the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match &self.error_kind {
            ErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body, when the server rejected the request.
    pub fn body(&self) -> Option<&str> {
        match &self.error_kind {
            ErrorKind::Status { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.error_kind, ErrorKind::Validation(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Status { status, body } => {
                write!(f, "Avoma API returned HTTP {}: {}", status, body)
            }
            ErrorKind::Transport(kind) => write!(f, "Transport error: {:?}", kind),
            ErrorKind::Validation(ValidationErrorKind::Schema { path }) => {
                write!(f, "Response validation failed at `{}`", path)?;
                if let Some(source) = &self.source {
                    write!(f, ": {}", source)?;
                }
                Ok(())
            }
            ErrorKind::Validation(kind) => {
                write!(f, "Validation error: {:?}", kind)?;
                if let Some(source) = &self.source {
                    write!(f, ": {}", source)?;
                }
                Ok(())
            }
            ErrorKind::Serialization => write!(f, "Failed to serialize request body"),
            ErrorKind::Config(kind) => write!(f, "Configuration error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_builder() {
            TransportErrorKind::Builder
        } else if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Request
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Transport(kind),
        }
    }
}

/// Helper function to create a status error from a rejected response.
pub fn status_error(status: u16, body: String) -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::Status { status, body },
    }
}

/// Helper function to create query validation errors.
pub fn query_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Validation(ValidationErrorKind::Query),
    }
}

/// Helper function to create response validation errors for a known field.
pub fn schema_error(path: &str, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Validation(ValidationErrorKind::Schema {
            path: path.to_string(),
        }),
    }
}

/// Helper function to create configuration errors.
pub fn config_error(kind: ConfigErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_exposes_code_and_body() {
        let err = status_error(404, "{\"detail\":\"Not found.\"}".to_string());

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("{\"detail\":\"Not found.\"}"));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = query_error("from_date is after to_date");

        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
        assert!(err.is_validation());
        assert!(err.to_string().contains("from_date is after to_date"));
    }

    #[test]
    fn test_config_error_keeps_message_as_source() {
        let err = config_error(ConfigErrorKind::BaseUrl, "relative URL without a base");

        assert_eq!(err.error_kind, ErrorKind::Config(ConfigErrorKind::BaseUrl));
        assert!(err.source().is_some());
    }
}
