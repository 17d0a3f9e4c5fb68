//! Ollama provider.
//!
//! Both `/api/chat` and `/api/generate` answer with a stream of
//! newline-delimited JSON objects; the named content field is concatenated
//! across lines and returned as a single string. Lines that are not valid
//! JSON are skipped.

use super::{ChatMessage, ChatProvider, ProviderError};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    pub fn new(config: OllamaConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/api/{}", self.config.base_url.trim_end_matches('/'), method)
    }

    async fn send(
        &self,
        method: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(self.api_url(method))
            .json(body)
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
                "Ollama API error {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            stream: true,
        };

        tracing::debug!(
            model = %self.config.model,
            turns = messages.len(),
            "Sending chat request to Ollama"
        );

        let response = self.send("chat", &request).await?;

        collect_stream::<ChatChunk, _>(response, |chunk| chunk.message.map(|m| m.content)).await
    }

    async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            images: vec![image_base64],
            stream: true,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generate request to Ollama"
        );

        let response = self.send("generate", &request).await?;

        collect_stream::<GenerateChunk, _>(response, |chunk| chunk.response).await
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

/// Concatenate the extracted field across a newline-delimited JSON stream.
async fn collect_stream<T, F>(response: reqwest::Response, extract: F) -> Result<String, ProviderError>
where
    T: serde::de::DeserializeOwned,
    F: Fn(T) -> Option<String>,
{
    let mut stream = response.bytes_stream();
    let mut buffer = String::new();
    let mut collected = String::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ProviderError::NetworkError(e.to_string()))?;
        buffer.push_str(&String::from_utf8_lossy(&chunk));
        drain_lines(&mut buffer, &mut collected, &extract);
    }

    // Flush a trailing line that arrived without its newline
    buffer.push('\n');
    drain_lines(&mut buffer, &mut collected, &extract);

    Ok(collected)
}

fn drain_lines<T, F>(buffer: &mut String, collected: &mut String, extract: &F)
where
    T: serde::de::DeserializeOwned,
    F: Fn(T) -> Option<String>,
{
    while let Some(pos) = buffer.find('\n') {
        let line: String = buffer.drain(..=pos).collect();
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(chunk) => {
                if let Some(part) = extract(chunk) {
                    collected.push_str(&part);
                }
            }
            // Invalid JSON lines are skipped, not fatal
            Err(_) => continue,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    images: Vec<&'a str>,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatChunk {
    message: Option<ChunkMessage>,
}

#[derive(Deserialize)]
struct ChunkMessage {
    content: String,
}

#[derive(Deserialize)]
struct GenerateChunk {
    response: Option<String>,
}
