use crate::dtos::{ChatRequest, ChatResponse};
use crate::services::providers::ChatMessage;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let messages: Vec<ChatMessage> = request.messages.iter().map(ChatMessage::from).collect();

    let outcome = state.chat.chat(&messages).await?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        provider: outcome.provider,
    }))
}

pub async fn enhanced_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let mut messages: Vec<ChatMessage> = Vec::with_capacity(request.messages.len() + 1);

    // Fold recent analyses into a leading system message
    let recent = state
        .db
        .recent_analyses(state.config.retrieval.context_rows)
        .await?;

    if !recent.is_empty() {
        let mut context = String::from("Recent drawing analyses for context:\n");
        for record in &recent {
            let name = record.file_name.as_deref().unwrap_or("drawing");
            match (record.width_ft, record.length_ft, record.square_footage) {
                (Some(width), Some(length), Some(sqft)) => {
                    context.push_str(&format!(
                        "- {}: {} x {} ft, {} sq ft\n",
                        name, width, length, sqft
                    ));
                }
                _ => {
                    context.push_str(&format!("- {}: dimensions not detected\n", name));
                }
            }
        }
        messages.push(ChatMessage::new("system", context));
    }

    messages.extend(request.messages.iter().map(ChatMessage::from));

    let outcome = state.chat.chat(&messages).await?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        provider: outcome.provider,
    }))
}
