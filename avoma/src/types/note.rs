//! Types for meeting notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::common::MAX_PAGE_SIZE;
use crate::error::Error;
use crate::http::params::append_page_size;
use crate::http::{DateRange, IntoQueryParams, QueryParams, ToQueryValue};
use crate::pagination::PaginatedResponse;

/// Rendering the server applies to note content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Html,
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl ToQueryValue for OutputFormat {
    fn to_query_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// Note body: a structured document for [`OutputFormat::Json`], pre-rendered
/// text for HTML and Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Structured(Map<String, Value>),
    Rendered(String),
}

impl Content {
    pub fn as_structured(&self) -> Option<&Map<String, Value>> {
        match self {
            Content::Structured(map) => Some(map),
            Content::Rendered(_) => None,
        }
    }

    pub fn as_rendered(&self) -> Option<&str> {
        match self {
            Content::Rendered(text) => Some(text),
            Content::Structured(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub meeting_uuid: Option<Uuid>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub data: Content,
}

pub type List = PaginatedResponse<Note>;

/// Filters for the notes listing. `output_format` is always transmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub range: DateRange,
    pub meeting_uuid: Option<Uuid>,
    /// Smart category uuid to restrict notes to.
    pub custom_category: Option<Uuid>,
    pub output_format: OutputFormat,
    pub page_size: Option<u32>,
    pub follow_pagination: bool,
}

impl Query {
    pub fn new(from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        Self {
            range: DateRange::new(from_date, to_date),
            meeting_uuid: None,
            custom_category: None,
            output_format: OutputFormat::default(),
            page_size: None,
            follow_pagination: false,
        }
    }

    pub fn with_meeting(mut self, meeting_uuid: Uuid) -> Self {
        self.meeting_uuid = Some(meeting_uuid);
        self
    }

    pub fn with_custom_category(mut self, category_uuid: Uuid) -> Self {
        self.custom_category = Some(category_uuid);
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_follow_pagination(mut self, follow: bool) -> Self {
        self.follow_pagination = follow;
        self
    }
}

impl IntoQueryParams for &Query {
    fn into_query_params(self) -> Result<QueryParams, Error> {
        let mut params = QueryParams::new();
        self.range.append_to(&mut params)?;
        params.insert_opt("meeting_uuid", self.meeting_uuid);
        params.insert_opt("custom_category", self.custom_category);
        params.insert("output_format", self.output_format);
        append_page_size(&mut params, self.page_size, self.follow_pagination, MAX_PAGE_SIZE)?;
        Ok(params)
    }
}
