//! Request bodies for the agent, chat, and versioning endpoints.
//!
//! Each body can be checked locally with `validate()` before it is sent, so
//! obviously incomplete requests fail without a round trip. Optional fields
//! are skipped when absent; the backend applies its own defaults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::ContentType;
use crate::errors::CoreError;

fn require(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Body of `POST /api/v1/agents/strategy`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategyRequest {
    pub student_id: String,
    pub tutor_id: String,
    pub subject: String,
    pub weeks: u32,
}

impl StrategyRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.student_id, "student_id")?;
        require(&self.tutor_id, "tutor_id")?;
        require(&self.subject, "subject")?;
        if self.weeks == 0 {
            return Err(CoreError::validation("weeks must be at least 1"));
        }
        Ok(())
    }
}

/// Body of `POST /api/v1/agents/lesson`.
///
/// A lesson is built either from a free topic or from one week of an existing
/// strategy, never both.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonRequest {
    pub student_id: String,
    pub tutor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_week_number: Option<u32>,
}

impl LessonRequest {
    #[must_use]
    pub fn from_topic(
        student_id: impl Into<String>,
        tutor_id: impl Into<String>,
        topic: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            tutor_id: tutor_id.into(),
            topic: Some(topic.into()),
            duration,
            strategy_id: None,
            strategy_week_number: None,
        }
    }

    #[must_use]
    pub fn from_strategy_week(
        student_id: impl Into<String>,
        tutor_id: impl Into<String>,
        strategy_id: impl Into<String>,
        week: u32,
        duration: u32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            tutor_id: tutor_id.into(),
            topic: None,
            duration,
            strategy_id: Some(strategy_id.into()),
            strategy_week_number: Some(week),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.student_id, "student_id")?;
        require(&self.tutor_id, "tutor_id")?;
        match (&self.topic, &self.strategy_id, self.strategy_week_number) {
            (Some(topic), None, None) => require(topic, "topic"),
            (None, Some(strategy), Some(week)) => {
                require(strategy, "strategy_id")?;
                if week == 0 {
                    return Err(CoreError::validation("strategy week numbers start at 1"));
                }
                Ok(())
            }
            (None, None, None) => Err(CoreError::validation(
                "either a topic or a strategy week is required",
            )),
            _ => Err(CoreError::validation(
                "a lesson comes from a topic or a strategy week, not both",
            )),
        }
    }
}

/// Body of `POST /api/v1/agents/activity`.
///
/// An activity is built either from a topic (plus optional description) or
/// from one phase of an existing lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityRequest {
    pub student_id: String,
    pub tutor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_description: Option<String>,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_phase: Option<String>,
    pub max_attempts: u32,
}

impl ActivityRequest {
    #[must_use]
    pub fn from_topic(
        student_id: impl Into<String>,
        tutor_id: impl Into<String>,
        topic: impl Into<String>,
        description: Option<String>,
        duration: u32,
        max_attempts: u32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            tutor_id: tutor_id.into(),
            topic: Some(topic.into()),
            activity_description: description,
            duration,
            lesson_id: None,
            lesson_phase: None,
            max_attempts,
        }
    }

    #[must_use]
    pub fn from_lesson_phase(
        student_id: impl Into<String>,
        tutor_id: impl Into<String>,
        lesson_id: impl Into<String>,
        phase: impl Into<String>,
        duration: u32,
        max_attempts: u32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            tutor_id: tutor_id.into(),
            topic: None,
            activity_description: None,
            duration,
            lesson_id: Some(lesson_id.into()),
            lesson_phase: Some(phase.into()),
            max_attempts,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.student_id, "student_id")?;
        require(&self.tutor_id, "tutor_id")?;
        if self.max_attempts == 0 {
            return Err(CoreError::validation("max_attempts must be at least 1"));
        }
        let from_topic = self.topic.is_some() || self.activity_description.is_some();
        let from_lesson = self.lesson_id.is_some() || self.lesson_phase.is_some();
        match (from_topic, from_lesson) {
            (true, false) => require(self.topic.as_deref().unwrap_or_default(), "topic"),
            (false, true) => {
                require(self.lesson_id.as_deref().unwrap_or_default(), "lesson_id")?;
                require(self.lesson_phase.as_deref().unwrap_or_default(), "lesson_phase")
            }
            (false, false) => Err(CoreError::validation(
                "either a topic or a lesson phase is required",
            )),
            (true, true) => Err(CoreError::validation(
                "an activity comes from a topic or a lesson phase, not both",
            )),
        }
    }
}

/// Body of `POST /api/v1/agents/activity/redeploy`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RedeployRequest {
    pub activity_id: String,
    pub student_id: String,
}

impl RedeployRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.activity_id, "activity_id")?;
        require(&self.student_id, "student_id")
    }
}

/// Body of `POST /api/v1/activity/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatRequest {
    pub activity_id: String,
    pub tutor_id: String,
    pub student_id: String,
    pub message: String,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.activity_id, "activity_id")?;
        require(&self.tutor_id, "tutor_id")?;
        require(&self.student_id, "student_id")?;
        require(&self.message, "message")
    }
}

/// Body of `POST /api/v1/content/save-version`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SaveVersionRequest {
    pub content_type: ContentType,
    pub content_id: String,
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_notes: Option<String>,
    pub tutor_id: String,
}

impl SaveVersionRequest {
    /// A tutor's manual edit of editor markup.
    ///
    /// The markup is wrapped as `{"content": html, "format": "html"}` and the
    /// summary defaults to `Tutor edited <type>`.
    #[must_use]
    pub fn html_edit(
        content_type: ContentType,
        content_id: impl Into<String>,
        html: impl Into<String>,
        edit_notes: impl Into<String>,
        tutor_id: impl Into<String>,
        changes_summary: Option<String>,
    ) -> Self {
        Self {
            content_type,
            content_id: content_id.into(),
            content: serde_json::json!({ "content": html.into(), "format": "html" }),
            changes_summary: Some(
                changes_summary.unwrap_or_else(|| format!("Tutor edited {content_type}")),
            ),
            edit_notes: Some(edit_notes.into()),
            tutor_id: tutor_id.into(),
        }
    }

    /// Edits must say why they were made; the notes feed the backend's
    /// learning insights.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.content_id, "content_id")?;
        require(&self.tutor_id, "tutor_id")?;
        if self
            .edit_notes
            .as_deref()
            .is_none_or(|notes| notes.trim().is_empty())
        {
            return Err(CoreError::validation(
                "edit notes are required: explain why the content was changed",
            ));
        }
        let empty_body = match &self.content {
            Value::Null => true,
            Value::Object(map) => map
                .get("content")
                .and_then(Value::as_str)
                .is_some_and(|s| s.trim().is_empty()),
            _ => false,
        };
        if empty_body {
            return Err(CoreError::validation("edited content is empty"));
        }
        Ok(())
    }
}
