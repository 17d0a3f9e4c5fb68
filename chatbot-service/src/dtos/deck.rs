use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct MaterialsRequest {
    #[validate(range(min = 0.1, max = 500.0))]
    pub length_ft: f64,
    #[validate(range(min = 0.1, max = 500.0))]
    pub width_ft: f64,
    #[validate(range(min = 1.0, max = 24.0))]
    pub board_width_in: Option<f64>,
    #[validate(range(min = 1.0, max = 32.0))]
    pub board_length_ft: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub waste_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MaterialsEstimate {
    pub deck_area_sqft: f64,
    pub board_area_sqft: f64,
    pub boards: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkirtingMaterial {
    Composite,
    Pvc,
    MineralBoard,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SkirtingRequest {
    #[validate(range(min = 0.1, max = 500.0))]
    pub length_ft: f64,
    #[validate(range(min = 0.1, max = 500.0))]
    pub width_ft: f64,
    #[validate(range(min = 0.1, max = 20.0))]
    pub height_ft: f64,
    #[validate(range(min = 3, max = 4))]
    pub sides: Option<u8>,
    pub material: Option<SkirtingMaterial>,
}

#[derive(Debug, Serialize)]
pub struct SkirtingEstimate {
    pub perimeter_ft: f64,
    pub skirting_area_sqft: f64,
    pub panels_needed: u32,
    pub material: Option<SkirtingMaterial>,
    pub tip: String,
    pub note: Option<String>,
}
