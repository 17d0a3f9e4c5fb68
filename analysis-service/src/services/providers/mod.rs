//! Upstream AI provider abstractions and implementations.
//!
//! Trait seams keep the handlers independent of the concrete vendor; the
//! router adds one-hop failover from the configured primary to a secondary.

pub mod huggingface;
pub mod mock;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => AppError::ServiceUnavailable(msg),
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

/// One turn of a conversation, in the wire shape every provider understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Result of a transcription call.
#[derive(Debug, Clone)]
pub struct Transcription {
    pub text: String,
    pub language: Option<String>,
}

/// Result of an image enhancement call.
#[derive(Debug, Clone)]
pub struct EnhancedImage {
    pub data: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Run a conversation and return the assistant reply.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;

    /// Describe a base64-encoded image, guided by `prompt`.
    async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<Transcription, ProviderError>;
}

#[async_trait]
pub trait ImageEnhancer: Send + Sync {
    async fn enhance(&self, image: Vec<u8>) -> Result<EnhancedImage, ProviderError>;
}

/// Reply plus the provider that produced it.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub reply: String,
    pub provider: String,
}

/// Primary provider with optional one-hop failover.
#[derive(Clone)]
pub struct ProviderRouter {
    primary: Arc<dyn ChatProvider>,
    fallback: Option<Arc<dyn ChatProvider>>,
}

impl ProviderRouter {
    pub fn new(primary: Arc<dyn ChatProvider>, fallback: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { primary, fallback }
    }

    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatOutcome, ProviderError> {
        match self.primary.chat(messages).await {
            Ok(reply) => Ok(ChatOutcome {
                reply,
                provider: self.primary.name().to_string(),
            }),
            Err(err) => {
                let Some(fallback) = &self.fallback else {
                    return Err(err);
                };
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = fallback.name(),
                    error = %err,
                    "Primary chat provider failed, falling back"
                );
                let reply = fallback.chat(messages).await?;
                Ok(ChatOutcome {
                    reply,
                    provider: fallback.name().to_string(),
                })
            }
        }
    }

    pub async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<ChatOutcome, ProviderError> {
        match self.primary.describe_image(prompt, image_base64).await {
            Ok(reply) => Ok(ChatOutcome {
                reply,
                provider: self.primary.name().to_string(),
            }),
            Err(err) => {
                let Some(fallback) = &self.fallback else {
                    return Err(err);
                };
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = fallback.name(),
                    error = %err,
                    "Primary vision provider failed, falling back"
                );
                let reply = fallback.describe_image(prompt, image_base64).await?;
                Ok(ChatOutcome {
                    reply,
                    provider: fallback.name().to_string(),
                })
            }
        }
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.primary.health_check().await
    }
}
