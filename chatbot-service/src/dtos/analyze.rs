use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ImageAnalysisRequest {
    #[validate(length(min = 1, message = "image payload is required"))]
    pub image_base64: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BotQueryRequest {
    #[validate(length(min = 1, max = 8192))]
    pub message: String,
}
