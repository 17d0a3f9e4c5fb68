pub mod analyze;
pub mod blueprint;
pub mod chat;
pub mod enhance;
pub mod health;
pub mod voice;

pub use analyze::{analyze_image, full_analyze, image_info, vision_query};
pub use blueprint::render_blueprint;
pub use chat::{chat, enhanced_chat};
pub use enhance::enhance_image;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use voice::transcribe_voice;

use axum::extract::Multipart;
use service_core::error::AppError;

pub(crate) struct UploadedFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Read the first non-empty multipart field as an uploaded file.
pub(crate) async fn read_upload(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
        })?
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file uploaded")))?;

    let file_name = field.file_name().unwrap_or("unnamed").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
        .to_vec();

    if data.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Empty upload")));
    }

    Ok(UploadedFile {
        file_name,
        mime_type,
        data,
    })
}
