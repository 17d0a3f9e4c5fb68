//! Typed client for the analysis tier.
//!
//! The chatbot service owns no AI logic of its own; image analysis and chat
//! replies are forwarded here and upstream failures surface as 502s.

use crate::dtos::chat::{ChatReply, ChatTurn};
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisClientError {
    #[error("Failed to reach analysis service: {0}")]
    Transport(String),

    #[error("Analysis service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to decode analysis response: {0}")]
    Decode(String),
}

impl From<AnalysisClientError> for AppError {
    fn from(err: AnalysisClientError) -> Self {
        AppError::BadGateway(err.to_string())
    }
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward image bytes to `/full-analyze` and return its JSON unchanged.
    pub async fn full_analyze(
        &self,
        file_name: &str,
        mime_type: &str,
        data: Vec<u8>,
    ) -> Result<serde_json::Value, AnalysisClientError> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| AnalysisClientError::Transport(e.to_string()))?;

        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/full-analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisClientError::Transport(e.to_string()))?;

        Self::json_body(response).await
    }

    /// Forward a conversation to `/chat`.
    pub async fn chat(&self, messages: &[ChatTurn]) -> Result<ChatReply, AnalysisClientError> {
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&serde_json::json!({ "messages": messages }))
            .send()
            .await
            .map_err(|e| AnalysisClientError::Transport(e.to_string()))?;

        let value = Self::json_body(response).await?;

        serde_json::from_value(value).map_err(|e| AnalysisClientError::Decode(e.to_string()))
    }

    async fn json_body(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, AnalysisClientError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisClientError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AnalysisClientError::Decode(e.to_string()))
    }
}
