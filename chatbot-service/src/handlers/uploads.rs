use crate::dtos::{UploadListParams, UploadListResponse, UploadResponse};
use crate::models::UploadRecord;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use uuid::Uuid;

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
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

    if data.len() > state.config.upload.max_size_bytes {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "File too large (max {} bytes)",
            state.config.upload.max_size_bytes
        )));
    }

    let extension = std::path::Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("bin");
    let storage_key = format!("{}.{}", Uuid::new_v4(), extension);

    let record = UploadRecord::new(file_name, mime_type, data.len() as i64, storage_key);

    tracing::info!(
        upload_id = %record.id,
        file_name = %record.file_name,
        size = record.size_bytes,
        "Upload started"
    );

    // 1. Write the file
    state
        .storage
        .upload(&record.storage_key, data)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to store upload {} at {}: {}",
                record.id,
                record.storage_key,
                e
            );
            e
        })?;

    // 2. Record it in the history
    state.db.insert_upload(&record).await?;

    metrics::counter!("uploads_total", "mime_type" => record.mime_type.clone()).increment(1);

    tracing::info!(upload_id = %record.id, "Upload completed");

    Ok((StatusCode::CREATED, Json(UploadResponse::from(record))))
}

pub async fn list_uploads(
    State(state): State<AppState>,
    Query(params): Query<UploadListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(20).clamp(1, 100);

    let total = state.db.count_uploads().await?;
    let records = state.db.list_uploads(page, page_size).await?;

    let total_pages = (total as f64 / page_size as f64).ceil() as u64;

    Ok(Json(UploadListResponse {
        uploads: records.into_iter().map(UploadResponse::from).collect(),
        total,
        page,
        page_size,
        total_pages,
    }))
}

pub async fn download_upload(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .db
        .get_upload(&upload_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Upload not found")))?;

    let data = state
        .storage
        .download(&record.storage_key)
        .await
        .map_err(|e| {
            tracing::error!(
                upload_id = %upload_id,
                storage_key = %record.storage_key,
                error = %e,
                "Failed to read stored upload"
            );
            AppError::NotFound(anyhow::anyhow!("Stored file not found"))
        })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, record.mime_type),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", record.file_name),
            ),
        ],
        data,
    ))
}
