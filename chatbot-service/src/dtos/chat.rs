use crate::models::ChatMessage;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 128))]
    pub session_id: String,
    #[validate(length(min = 1, max = 8192))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub provider: String,
}

/// One turn in the shape the analysis service expects.
#[derive(Debug, Serialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for ChatTurn {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.clone(),
            content: message.content.clone(),
        }
    }
}

/// Reply shape returned by the analysis service.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub provider: String,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub session_id: String,
    pub messages: Vec<ChatHistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryEntry {
    pub role: String,
    pub content: String,
    pub created_at: String,
}

impl From<ChatMessage> for ChatHistoryEntry {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}
