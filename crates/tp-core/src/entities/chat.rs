use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MessageType;

/// One turn of the conversational activity editor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub tutor_id: Option<String>,
    pub message_type: MessageType,
    pub message_content: String,
    /// Activity code after an agent response was applied.
    #[serde(default)]
    pub code_snapshot: Option<String>,
    #[serde(default)]
    pub sandbox_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
