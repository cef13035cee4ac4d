//! # avoma
//!
//! Typed async client for the Avoma meeting-intelligence REST API:
//! - Bearer-token authentication against a configurable base URL
//! - One resource API per endpoint family (meetings, calls, recordings,
//!   transcriptions, sentiments, users, notes, templates, smart categories)
//! - Response validation with the JSON path of the first mismatching field
//! - Opt-in cursor pagination that merges every page into one response
//!
//! Every call makes a single attempt; there is no retry, rate limiting or
//! caching. Failures reach the caller as [`Error`], with the status code and
//! raw body attached for non-success responses.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use avoma::{types::meeting, AvomaClient};
//!
//! let client = AvomaClient::new(api_key)?;
//! let query = meeting::Query::new(from, to).with_follow_pagination(true);
//! let meetings = client.meetings().list(&query).await?;
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod pagination;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use client::{AvomaClient, ClientBuilder};
pub use error::{Error, ErrorKind};
pub use http::DEFAULT_BASE_URL;
pub use pagination::PaginatedResponse;
pub use schema::Field;
