use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded drawing analysis; surfaced again as enhanced-chat context.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AnalysisRecord {
    pub id: String,
    pub file_name: Option<String>,
    pub ocr_text: String,
    pub width_ft: Option<f64>,
    pub length_ft: Option<f64>,
    pub square_footage: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(
        file_name: Option<String>,
        ocr_text: String,
        width_ft: Option<f64>,
        length_ft: Option<f64>,
        square_footage: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name,
            ocr_text,
            width_ft,
            length_ft,
            square_footage,
            created_at: Utc::now(),
        }
    }
}
