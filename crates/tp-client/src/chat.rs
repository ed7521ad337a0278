//! Conversational edits of a deployed activity.

use tp_core::entities::ChatMessage;
use tp_core::requests::ChatRequest;
use tp_core::responses::ChatReply;

use crate::{ClientError, TutorClient, segment};

#[derive(serde::Deserialize)]
struct ChatHistoryEnvelope {
    #[serde(default)]
    chat_history: Vec<ChatMessage>,
}

impl TutorClient {
    /// Ask the activity agent to change a deployed activity.
    ///
    /// The backend regenerates the code, redeploys it, and records both the
    /// request and the reply in the activity's chat history.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] for blank fields, otherwise
    /// any transport, status, or decode error.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        request.validate()?;
        self.post_json("/api/v1/activity/chat", request).await
    }

    /// Chat history of one activity, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be decoded.
    pub async fn chat_history(&self, activity_id: &str) -> Result<Vec<ChatMessage>, ClientError> {
        let path = format!("/api/v1/activity/chat/{}", segment(activity_id));
        let data: ChatHistoryEnvelope = self.get_json(&path).await?;
        Ok(data.chat_history)
    }
}
