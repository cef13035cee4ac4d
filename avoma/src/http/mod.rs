//! Transport plumbing: query string building and the authenticated request primitive.

pub mod client;
pub mod params;

pub use client::{normalize_base_url, HttpClient, HttpClientConfig, DEFAULT_BASE_URL};
pub use params::{DateRange, IntoQueryParams, QueryParams, ToQueryValue};
