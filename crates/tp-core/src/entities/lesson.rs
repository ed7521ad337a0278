use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SelfEvaluation;

/// A past lesson, as listed by `GET /api/v1/data/lessons/{student}`.
///
/// `content` is the generated lesson object (title, objectives, readings,
/// activities, ...). Its shape drifted across backend releases, so it is kept
/// as raw JSON and interpreted only by the formatter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LessonRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub strategy_id: Option<String>,
    #[serde(default)]
    pub strategy_week_number: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub self_evaluation: Option<SelfEvaluation>,
}

impl LessonRecord {
    /// Names of the lesson phases an activity can be attached to.
    ///
    /// Older 5E lessons list `phases`; newer lessons are organised around the
    /// fixed pre-class/class/homework sections.
    #[must_use]
    pub fn phase_names(&self) -> Vec<String> {
        let listed: Vec<String> = self
            .content
            .get("phases")
            .and_then(Value::as_array)
            .map(|phases| {
                phases
                    .iter()
                    .filter_map(|p| p.get("name").or_else(|| p.get("phase")))
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if listed.is_empty() {
            ["Pre-Class Work", "Class Activities", "Homework"]
                .iter()
                .map(|s| (*s).to_string())
                .collect()
        } else {
            listed
        }
    }
}
