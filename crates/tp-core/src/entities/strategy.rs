use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SelfEvaluation;

const DEFAULT_WEEK_COUNT: u32 = 12;

/// Body of a generated (or tutor-edited) learning strategy.
///
/// `content` is markdown when `format` is `markdown` and editor HTML once a
/// tutor has saved a manual edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StrategyContent {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub weeks: Option<u32>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub strategy_id: Option<String>,
    /// Fields the backend adds that the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StrategyContent {
    /// Whether `content` is already editor markup rather than markdown.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.format.as_deref() == Some("html")
    }

    /// Number of weeks a lesson can be planned from: the declared week count,
    /// else one week per topic, else 12.
    #[must_use]
    pub fn week_count(&self) -> u32 {
        self.weeks
            .filter(|weeks| *weeks > 0)
            .or_else(|| u32::try_from(self.topics.len()).ok().filter(|n| *n > 0))
            .unwrap_or(DEFAULT_WEEK_COUNT)
    }
}

/// A past strategy, as listed by `GET /api/v1/data/strategies/{student}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StrategyRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: StrategyContent,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub self_evaluation: Option<SelfEvaluation>,
}
