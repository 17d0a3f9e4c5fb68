//! Hugging Face inference endpoint used for image enhancement.
//!
//! The endpoint takes the raw image bytes and answers either with an image
//! body or with JSON carrying a base64 `generated_image`.

use super::{EnhancedImage, ImageEnhancer, ProviderError};
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub api_token: String,
    pub enhance_url: String,
}

pub struct HuggingFaceEnhancer {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceEnhancer {
    pub fn new(config: HuggingFaceConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl ImageEnhancer for HuggingFaceEnhancer {
    async fn enhance(&self, image: Vec<u8>) -> Result<EnhancedImage, ProviderError> {
        if self.config.api_token.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Hugging Face API token not configured".to_string(),
            ));
        }

        tracing::debug!(
            url = %self.config.enhance_url,
            size = image.len(),
            "Sending enhancement request to Hugging Face"
        );

        let response = self
            .client
            .post(&self.config.enhance_url)
            .bearer_auth(&self.config.api_token)
            .body(image)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }
            return Err(ProviderError::ApiError(format!(
                "Hugging Face API error {}: {}",
                status, body
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // Image body: return as-is
        if content_type.starts_with("image/") {
            let data = response
                .bytes()
                .await
                .map_err(|e| ProviderError::NetworkError(e.to_string()))?
                .to_vec();
            return Ok(EnhancedImage { data, content_type });
        }

        // JSON body with a base64 image
        let body: Vec<GeneratedImage> = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let encoded = body
            .into_iter()
            .next()
            .map(|g| g.generated_image)
            .ok_or_else(|| ProviderError::InvalidResponse("Empty enhancement result".to_string()))?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(EnhancedImage {
            data,
            content_type: "image/png".to_string(),
        })
    }
}

#[derive(Deserialize)]
struct GeneratedImage {
    generated_image: String,
}
