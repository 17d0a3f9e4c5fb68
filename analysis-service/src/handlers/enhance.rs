use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
};
use service_core::error::AppError;

pub async fn enhance_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = super::read_upload(&mut multipart).await?;

    tracing::info!(
        file_name = %upload.file_name,
        size = upload.data.len(),
        "Enhancement requested"
    );

    let enhanced = state.enhancer.enhance(upload.data).await?;

    Ok((
        [(header::CONTENT_TYPE, enhanced.content_type)],
        enhanced.data,
    ))
}
