//! Response bodies returned by the backend's agent, chat, versioning,
//! reflection, and health endpoints.
//!
//! List endpoints wrap their rows in `{"success": true, "<rows>": [...]}`;
//! those envelopes are unwrapped inside `tp-client` and never surface here.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{
    ActivityContent, Deployment, SelfEvaluation, StrategyContent, Student, Tutor,
};

/// Response from `POST /api/v1/agents/strategy`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StrategyResponse {
    #[serde(default)]
    pub success: bool,
    pub strategy_id: String,
    #[serde(default)]
    pub content: StrategyContent,
    #[serde(default)]
    pub evaluation: Option<SelfEvaluation>,
    #[serde(default)]
    pub student: Value,
    #[serde(default)]
    pub tutor: Value,
    /// Research sources the planner cited.
    #[serde(default)]
    pub sources: Vec<Value>,
}

/// Response from `POST /api/v1/agents/lesson`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LessonResponse {
    #[serde(default)]
    pub success: bool,
    pub lesson_id: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub evaluation: Option<SelfEvaluation>,
    #[serde(default)]
    pub student: Value,
    #[serde(default)]
    pub tutor: Value,
}

/// Response from `POST /api/v1/agents/activity`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActivityResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub content: ActivityContent,
    #[serde(default)]
    pub evaluation: Option<SelfEvaluation>,
    #[serde(default)]
    pub deployment: Option<Deployment>,
    #[serde(default)]
    pub sandbox_url: Option<String>,
    #[serde(default)]
    pub student: Value,
    #[serde(default)]
    pub tutor: Value,
}

/// Response from `POST /api/v1/agents/activity/redeploy`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RedeployResponse {
    #[serde(default)]
    pub success: bool,
    pub activity_id: String,
    #[serde(default)]
    pub deployment: Deployment,
    #[serde(default)]
    pub sandbox_url: Option<String>,
}

/// Response from `POST /api/v1/activity/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChatReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub new_code: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub sandbox_url: Option<String>,
    #[serde(default)]
    pub changes_made: Value,
}

/// Response from `POST /api/v1/content/save-version`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SaveVersionResponse {
    #[serde(default)]
    pub success: bool,
    pub version_number: u32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub edit_notes: Option<String>,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub weave_enabled: bool,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Response from `GET /api/v1/reflection/insights/{agent}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InsightsResponse {
    #[serde(default)]
    pub success: bool,
    pub agent_type: String,
    #[serde(default)]
    pub insights: Vec<Value>,
}

/// Response from `POST /api/v1/reflection/analyze`.
///
/// A single-agent run fills `agent_type`, `insights_generated`, and
/// `insights`; an all-agent run fills `insights_by_agent`,
/// `total_insights`, and `details`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReflectionReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights_generated: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub insights_by_agent: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_insights: Option<u64>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl ReflectionReport {
    /// Number of insights produced, whichever shape the backend used.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total_insights
            .or(self.insights_generated)
            .unwrap_or_else(|| self.insights_by_agent.values().sum())
    }
}

/// Students and tutors fetched together to populate selection lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Roster {
    pub students: Vec<Student>,
    pub tutors: Vec<Tutor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_total_prefers_explicit_counts() {
        let single: ReflectionReport = serde_json::from_str(
            r#"{"success": true, "agent_type": "lesson_creator", "insights_generated": 2, "insights": [{}, {}]}"#,
        )
        .unwrap();
        assert_eq!(single.total(), 2);

        let all: ReflectionReport = serde_json::from_str(
            r#"{"success": true, "insights_by_agent": {"strategy_creator": 1, "lesson_creator": 3}}"#,
        )
        .unwrap();
        assert_eq!(all.total(), 4);
    }

    #[test]
    fn health_status_flags_unhealthy() {
        let h: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!h.is_healthy());
        assert!(!h.weave_enabled);
    }
}
