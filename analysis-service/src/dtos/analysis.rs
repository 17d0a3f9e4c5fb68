use crate::services::dimensions::Dimensions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct DimensionsDto {
    pub width_ft: Option<f64>,
    pub length_ft: Option<f64>,
    pub measurements_ft: Vec<f64>,
}

impl From<Dimensions> for DimensionsDto {
    fn from(dims: Dimensions) -> Self {
        Self {
            width_ft: dims.width_ft,
            length_ft: dims.length_ft,
            measurements_ft: dims.measurements_ft,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeImageResponse {
    pub ocr_text: String,
    pub dimensions: DimensionsDto,
}

#[derive(Debug, Deserialize)]
pub struct FullAnalyzeParams {
    pub include_preview: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct FullAnalyzeResponse {
    pub file_name: String,
    pub ocr_text: String,
    pub dimensions: DimensionsDto,
    pub square_footage_estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_preview: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageInfoResponse {
    pub width: u32,
    pub height: u32,
    pub format: String,
}
