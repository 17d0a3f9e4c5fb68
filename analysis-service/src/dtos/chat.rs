use crate::services::providers::ChatMessage;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "at least one message is required"))]
    pub messages: Vec<ChatMessageDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessageDto> for ChatMessage {
    fn from(dto: &ChatMessageDto) -> Self {
        ChatMessage::new(dto.role.clone(), dto.content.clone())
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub provider: String,
}
