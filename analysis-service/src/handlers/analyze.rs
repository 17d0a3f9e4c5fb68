use crate::dtos::{
    AnalyzeImageResponse, FullAnalyzeParams, FullAnalyzeResponse, ImageInfoResponse,
};
use crate::models::AnalysisRecord;
use crate::services::dimensions;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, Query, State},
    response::IntoResponse,
    Json,
};
use base64::Engine;
use service_core::error::AppError;

pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = super::read_upload(&mut multipart).await?;

    let ocr_text = state.ocr.extract_text(&upload.data).await?;
    let dims = dimensions::parse_dimensions(&ocr_text);

    Ok(Json(AnalyzeImageResponse {
        ocr_text,
        dimensions: dims.into(),
    }))
}

pub async fn full_analyze(
    State(state): State<AppState>,
    Query(params): Query<FullAnalyzeParams>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = super::read_upload(&mut multipart).await?;
    let start = std::time::Instant::now();

    // 1. OCR
    let ocr_text = state.ocr.extract_text(&upload.data).await?;

    // 2. Parse dimensions
    let dims = dimensions::parse_dimensions(&ocr_text);

    // 3. Square footage only when both sides parsed
    let square_footage = match (dims.width_ft, dims.length_ft) {
        (Some(width), Some(length)) => Some(dimensions::square_footage(width, length)),
        _ => None,
    };

    // 4. Record for enhanced-chat retrieval
    let record = AnalysisRecord::new(
        Some(upload.file_name.clone()),
        ocr_text.clone(),
        dims.width_ft,
        dims.length_ft,
        square_footage,
    );
    state.db.insert_analysis(&record).await?;

    metrics::counter!("drawing_analyses_total").increment(1);
    metrics::histogram!("drawing_analysis_duration_seconds")
        .record(start.elapsed().as_secs_f64());

    tracing::info!(
        analysis_id = %record.id,
        file_name = %upload.file_name,
        square_footage = ?square_footage,
        "Full analysis completed"
    );

    let image_preview = params.include_preview.unwrap_or(false).then(|| {
        format!(
            "data:{};base64,{}",
            upload.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&upload.data)
        )
    });

    Ok(Json(FullAnalyzeResponse {
        file_name: upload.file_name,
        ocr_text,
        dimensions: dims.into(),
        square_footage_estimate: square_footage,
        image_preview,
    }))
}

pub async fn image_info(mut multipart: Multipart) -> Result<impl IntoResponse, AppError> {
    let upload = super::read_upload(&mut multipart).await?;

    let format = image::guess_format(&upload.data)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid image file")))?;

    let decoded = image::load_from_memory(&upload.data)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid image file")))?;

    Ok(Json(ImageInfoResponse {
        width: decoded.width(),
        height: decoded.height(),
        format: format!("{:?}", format).to_lowercase(),
    }))
}

pub async fn vision_query(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut prompt = String::from("Describe image");
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        if name == "prompt" {
            prompt = field.text().await.map_err(|e| {
                AppError::BadRequest(anyhow::anyhow!("Failed to read prompt field: {}", e))
            })?;
        } else {
            let data = field
                .bytes()
                .await
                .map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
                })?
                .to_vec();
            if !data.is_empty() {
                file = Some(data);
            }
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file uploaded")))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&file);

    let outcome = state.chat.describe_image(&prompt, &encoded).await?;

    Ok(Json(serde_json::json!({
        "response": outcome.reply,
        "provider": outcome.provider,
    })))
}
