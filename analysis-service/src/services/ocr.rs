//! Text extraction from uploaded drawings.
//!
//! OCR runs through the external `tesseract` binary; a mock engine backs
//! tests and provider-less development setups.

use async_trait::async_trait;
use service_core::error::AppError;
use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommandExecutor {
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn execute(&self, program: &str, args: &[&str]) -> Result<Output, AppError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        tracing::debug!(
            program = %program,
            args = ?args,
            timeout_secs = %self.timeout.as_secs(),
            "Executing command"
        );

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| {
                AppError::InternalError(anyhow::anyhow!(
                    "Command timed out after {} seconds",
                    self.timeout.as_secs()
                ))
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                program = %program,
                args = ?args,
                stderr = %stderr,
                "Command failed"
            );
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Command failed: {}",
                stderr
            )));
        }

        Ok(output)
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<String, AppError>;
}

pub struct TesseractOcr {
    command: String,
    executor: CommandExecutor,
    temp_dir: PathBuf,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            executor: CommandExecutor::new(timeout),
            temp_dir: std::env::temp_dir(),
        }
    }
}

#[async_trait]
impl TextExtractor for TesseractOcr {
    async fn extract_text(&self, data: &[u8]) -> Result<String, AppError> {
        let temp_file = self.temp_dir.join(format!("ocr-{}.png", Uuid::new_v4()));

        tokio::fs::write(&temp_file, data).await.map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to write temp file: {}", e))
        })?;

        let input = temp_file
            .to_str()
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Non-UTF8 temp path")))?
            .to_string();

        let result = self.executor.execute(&self.command, &[&input, "stdout"]).await;

        let _ = tokio::fs::remove_file(&temp_file).await;

        let output = result?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Config-selected stand-in returning canned text.
pub struct MockOcr {
    text: String,
}

impl MockOcr {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TextExtractor for MockOcr {
    async fn extract_text(&self, _data: &[u8]) -> Result<String, AppError> {
        Ok(self.text.clone())
    }
}
