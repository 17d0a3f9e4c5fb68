use crate::dtos::{MaterialsRequest, SkirtingRequest};
use crate::services::deck;
use axum::{response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn deck_materials(
    Json(request): Json<MaterialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    Ok(Json(deck::estimate_materials(&request)))
}

pub async fn deck_skirting(
    Json(request): Json<SkirtingRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    Ok(Json(deck::estimate_skirting(&request)))
}
