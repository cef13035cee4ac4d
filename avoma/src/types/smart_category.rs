//! Types for smart categories: keyword and prompt based tagging rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pagination::PaginatedResponse;
use crate::schema::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub created: DateTime<Utc>,
    pub custom_category: Uuid,
    pub is_primary: bool,
    pub label: String,
    pub uuid: Uuid,
    #[serde(default)]
    pub variations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub created: DateTime<Utc>,
    pub custom_category: Uuid,
    pub label: String,
    pub uuid: Uuid,
    #[serde(default)]
    pub variations: Vec<String>,
}

/// How matches for a category feed into notes and tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub aug_notes_enabled: bool,
    pub keyword_notes_enabled: bool,
    pub keyword_tracking_enabled: bool,
    /// e.g. `short`, `medium`, `long`.
    pub prompt_extract_length: String,
    /// Where to extract around a prompt hit: `before` or `after`.
    pub prompt_extract_strategy: String,
    pub prompt_notes_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartCategory {
    pub uuid: Uuid,
    pub name: String,
    pub key: String,
    pub is_default: bool,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    pub settings: Settings,
}

impl SmartCategory {
    /// Whether `text` equals the label or a variation of any keyword,
    /// ignoring case.
    pub fn matches_keyword(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| {
            k.label.eq_ignore_ascii_case(text)
                || k.variations.iter().any(|v| v.eq_ignore_ascii_case(text))
        })
    }
}

pub type List = PaginatedResponse<SmartCategory>;

/// Body of `POST /smart_categories`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Create {
    pub name: String,
    pub keywords: Vec<String>,
    pub prompts: Vec<String>,
    pub settings: Settings,
}

/// Body of `PATCH /smart_categories/{uuid}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub keywords: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub prompts: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub settings: Field<Settings>,
}
