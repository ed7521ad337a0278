//! Value enums exchanged with the backend.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so their JSON form matches the backend's column values exactly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Kind of editable content that carries a version history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Strategy,
    Lesson,
}

impl ContentType {
    /// Path segment and `content_type` value used by the versioning endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Lesson => "lesson",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EditType
// ---------------------------------------------------------------------------

/// Origin of a content version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EditType {
    AiGenerated,
    ManualEdit,
}

impl EditType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiGenerated => "ai_generated",
            Self::ManualEdit => "manual_edit",
        }
    }

    /// Human label shown next to a version number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AiGenerated => "AI Generated",
            Self::ManualEdit => "Manual Edit",
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MessageType
// ---------------------------------------------------------------------------

/// Author side of an activity chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    TutorRequest,
    AgentResponse,
}

impl MessageType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TutorRequest => "tutor_request",
            Self::AgentResponse => "agent_response",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgentKind
// ---------------------------------------------------------------------------

/// Backend generation agents that accumulate learning insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    StrategyCreator,
    LessonCreator,
    ActivityCreator,
}

impl AgentKind {
    pub const ALL: [Self; 3] = [
        Self::StrategyCreator,
        Self::LessonCreator,
        Self::ActivityCreator,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrategyCreator => "strategy_creator",
            Self::LessonCreator => "lesson_creator",
            Self::ActivityCreator => "activity_creator",
        }
    }

    /// Display name used as the heading of a self-evaluation report.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::StrategyCreator => "Strategy Planner",
            Self::LessonCreator => "Lesson Creator",
            Self::ActivityCreator => "Activity Creator",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScoreBand
// ---------------------------------------------------------------------------

/// Quality band of a 0–10 self-evaluation score.
///
/// ```text
/// score >= 8  → strong
/// score >= 6  → fair
/// otherwise   → weak
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Strong
        } else if score >= 6.0 {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Fair => "fair",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(10.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(8.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(7.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(6.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(5.99), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Weak);
    }

    #[test]
    fn wire_spellings_match_backend_values() {
        assert_eq!(
            serde_json::to_string(&EditType::ManualEdit).unwrap(),
            "\"manual_edit\""
        );
        assert_eq!(
            serde_json::to_string(&MessageType::TutorRequest).unwrap(),
            "\"tutor_request\""
        );
        assert_eq!(
            serde_json::to_string(&AgentKind::ActivityCreator).unwrap(),
            "\"activity_creator\""
        );
        let parsed: ContentType = serde_json::from_str("\"lesson\"").unwrap();
        assert_eq!(parsed, ContentType::Lesson);
    }

    #[test]
    fn as_str_agrees_with_display() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(ContentType::Strategy.to_string(), "strategy");
        assert_eq!(EditType::AiGenerated.label(), "AI Generated");
    }
}
