use crate::dtos::TranscribeResponse;
use crate::services::voice;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn transcribe_voice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = super::read_upload(&mut multipart).await?;

    let transcription = state
        .transcriber
        .transcribe(upload.data, &upload.file_name)
        .await?;

    let command = voice::classify_command(&transcription.text);

    tracing::info!(
        file_name = %upload.file_name,
        kind = ?command.kind,
        "Voice transcription completed"
    );

    Ok(Json(TranscribeResponse {
        text: transcription.text,
        language: transcription.language,
        command: command.into(),
    }))
}
