//! Mock provider implementations for testing.

use super::{
    ChatMessage, ChatProvider, EnhancedImage, ImageEnhancer, ProviderError, Transcription,
    TranscriptionProvider,
};
use async_trait::async_trait;

/// Mock chat provider. A disabled instance fails every call, which is how
/// tests exercise the failover path.
pub struct MockChatProvider {
    enabled: bool,
}

impl MockChatProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn ensure_enabled(&self) -> Result<(), ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock chat provider not enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    fn name(&self) -> &str {
        if self.enabled {
            "mock"
        } else {
            "mock-disabled"
        }
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        self.ensure_enabled()?;

        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        Ok(format!("Mock reply for: {}", last_user))
    }

    async fn describe_image(
        &self,
        prompt: &str,
        _image_base64: &str,
    ) -> Result<String, ProviderError> {
        self.ensure_enabled()?;
        Ok(format!("Mock description for: {}", prompt))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        self.ensure_enabled()
    }
}

/// Mock transcriber with deterministic deck-flavored output.
pub struct MockTranscriber;

#[async_trait]
impl TranscriptionProvider for MockTranscriber {
    async fn transcribe(
        &self,
        _audio: Vec<u8>,
        _file_name: &str,
    ) -> Result<Transcription, ProviderError> {
        Ok(Transcription {
            text: "Measure the deck 12 by 16 feet".to_string(),
            language: Some("en".to_string()),
        })
    }
}

/// Mock enhancer that returns the input unchanged.
pub struct MockEnhancer;

#[async_trait]
impl ImageEnhancer for MockEnhancer {
    async fn enhance(&self, image: Vec<u8>) -> Result<EnhancedImage, ProviderError> {
        Ok(EnhancedImage {
            data: image,
            content_type: "image/png".to_string(),
        })
    }
}
