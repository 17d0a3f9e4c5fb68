use crate::dtos::chat::ChatTurn;
use crate::dtos::{BotQueryRequest, ImageAnalysisRequest};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use base64::Engine;
use service_core::error::AppError;
use validator::Validate;

pub async fn analyze_image(
    State(state): State<AppState>,
    Json(request): Json<ImageAnalysisRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let data = base64::engine::general_purpose::STANDARD
        .decode(&request.image_base64)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid base64 image: {}", e)))?;

    let file_name = request.file_name.as_deref().unwrap_or("upload.png");
    let mime_type = request.mime_type.as_deref().unwrap_or("image/png");

    tracing::info!(
        file_name = %file_name,
        size = data.len(),
        "Forwarding image for analysis"
    );

    let result = state
        .analysis
        .full_analyze(file_name, mime_type, data)
        .await?;

    Ok(Json(result))
}

pub async fn bot_query(
    State(state): State<AppState>,
    Json(request): Json<BotQueryRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let turns = vec![ChatTurn {
        role: "user".to_string(),
        content: request.message,
    }];

    let reply = state.analysis.chat(&turns).await?;

    Ok(Json(serde_json::json!({
        "reply": reply.reply,
        "provider": reply.provider,
    })))
}
