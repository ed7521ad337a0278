use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generated interactive activity body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActivityContent {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sandbox deployment outcome for an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Deployment {
    #[serde(default)]
    pub sandbox_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub exit_code: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    /// Number of generate/deploy rounds the backend needed.
    #[serde(default)]
    pub attempts: Option<u32>,
}

impl Deployment {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self.status.as_deref(), Some("success" | "running"))
    }
}
