use serde::{Deserialize, Serialize};
use validator::Validate;

/// Measurements summarized onto the rendered blueprint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlueprintSummary {
    #[validate(length(max = 120))]
    pub project_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub gross_living_area: f64,
    #[validate(range(min = 0.0))]
    pub net_square_footage: f64,
    #[validate(range(min = 0.0))]
    pub linear_railing_footage: f64,
    pub stair_cutouts: u32,
}
