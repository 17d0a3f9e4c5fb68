use crate::models::BlueprintSummary;
use crate::services::blueprint;
use axum::{http::header, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn render_blueprint(
    Json(summary): Json<BlueprintSummary>,
) -> Result<impl IntoResponse, AppError> {
    summary.validate()?;

    let svg = blueprint::render_blueprint(&summary);

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
