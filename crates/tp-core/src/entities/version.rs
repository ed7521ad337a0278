use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{ContentType, EditType};

/// One saved revision of a strategy or lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContentVersion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub content_id: Option<String>,
    pub version_number: u32,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub changes_summary: Option<String>,
    pub edit_type: EditType,
    /// Why the tutor made the edit.
    #[serde(default)]
    pub edit_notes: Option<String>,
    #[serde(default)]
    pub edited_by: Option<String>,
    pub created_at: DateTime<Utc>,
}
