use crate::dtos::chat::{ChatHistoryResponse, ChatRequest, ChatResponse, ChatTurn};
use crate::models::chat::{ROLE_ASSISTANT, ROLE_USER};
use crate::models::ChatMessage;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    // 1. Persist the user turn
    let user_message = ChatMessage::new(&request.session_id, ROLE_USER, &request.message);
    state.db.insert_message(&user_message).await?;

    // 2. Send the whole transcript upstream
    let transcript = state.db.session_messages(&request.session_id).await?;
    let turns: Vec<ChatTurn> = transcript.iter().map(ChatTurn::from).collect();

    let reply = state.analysis.chat(&turns).await?;

    // 3. Persist the assistant turn
    let assistant_message = ChatMessage::new(&request.session_id, ROLE_ASSISTANT, &reply.reply);
    state.db.insert_message(&assistant_message).await?;

    tracing::info!(
        session_id = %request.session_id,
        provider = %reply.provider,
        "Chat turn completed"
    );

    Ok(Json(ChatResponse {
        session_id: request.session_id,
        reply: reply.reply,
        provider: reply.provider,
    }))
}

pub async fn session_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let messages = state.db.session_messages(&session_id).await?;

    Ok(Json(ChatHistoryResponse {
        session_id,
        messages: messages.into_iter().map(Into::into).collect(),
    }))
}
