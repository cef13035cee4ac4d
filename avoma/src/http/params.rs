use chrono::{DateTime, SecondsFormat, TimeDelta, Timelike, Utc};

use crate::error::{query_error, Error};

/// Ordered list of query parameters for a single request.
///
/// Keys are only ever present when a value was supplied: optional filters that
/// were left unset are skipped by [`QueryParams::insert_opt`] rather than being
/// transmitted as empty strings or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates a new empty QueryParams.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key-value pair, replacing a previous value for the same key.
    pub fn insert(&mut self, key: &str, value: impl ToQueryValue) {
        let value = value.to_query_value();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Inserts the value only when it is present.
    pub fn insert_opt<V: ToQueryValue>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Retrieves a value by its key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// A trait for query objects that can be turned into request parameters.
///
/// Implementations validate themselves first, so a malformed query fails
/// before any network round-trip is made.
pub trait IntoQueryParams {
    /// Converts the implementing type into QueryParams.
    fn into_query_params(self) -> Result<QueryParams, Error>;
}

/// Scalar values that can be sent as a query string value.
pub trait ToQueryValue {
    fn to_query_value(&self) -> String;
}

impl ToQueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl ToQueryValue for &str {
    fn to_query_value(&self) -> String {
        (*self).to_string()
    }
}

impl ToQueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl ToQueryValue for u32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl ToQueryValue for f64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl ToQueryValue for uuid::Uuid {
    fn to_query_value(&self) -> String {
        self.hyphenated().to_string()
    }
}

impl ToQueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Inclusive date-time window shared by most listing endpoints.
///
/// The server takes second precision. A sub-second `to_date` is rounded up
/// to the next whole second so the window is never narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        Self { from_date, to_date }
    }

    /// Writes `from_date` / `to_date` after checking the window is not inverted.
    pub(crate) fn append_to(&self, params: &mut QueryParams) -> Result<(), Error> {
        if self.from_date > self.to_date {
            return Err(query_error(&format!(
                "from_date ({}) is after to_date ({})",
                self.from_date.to_query_value(),
                self.to_date.to_query_value()
            )));
        }
        params.insert("from_date", self.from_date);
        params.insert("to_date", ceil_to_second(self.to_date));
        Ok(())
    }
}

fn ceil_to_second(instant: DateTime<Utc>) -> DateTime<Utc> {
    match instant.nanosecond() {
        0 => instant,
        nanos => instant - TimeDelta::nanoseconds(i64::from(nanos)) + TimeDelta::seconds(1),
    }
}

/// Checks a caller supplied page size against the resource maximum.
pub(crate) fn check_page_size(page_size: Option<u32>, max: u32) -> Result<Option<u32>, Error> {
    match page_size {
        Some(size) if size == 0 || size > max => Err(query_error(&format!(
            "page_size must be between 1 and {}, got {}",
            max, size
        ))),
        other => Ok(other),
    }
}

/// Writes `page_size`, defaulting to the resource maximum when every page is
/// going to be fetched anyway.
pub(crate) fn append_page_size(
    params: &mut QueryParams,
    page_size: Option<u32>,
    follow_pagination: bool,
    max: u32,
) -> Result<(), Error> {
    let page_size = check_page_size(page_size, max)?.or(follow_pagination.then_some(max));
    params.insert_opt("page_size", page_size);
    Ok(())
}
