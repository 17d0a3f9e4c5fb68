pub mod analyze;
pub mod chat;
pub mod deck;
pub mod uploads;

pub use analyze::{BotQueryRequest, ImageAnalysisRequest};
pub use chat::{ChatHistoryResponse, ChatRequest, ChatResponse};
pub use deck::{MaterialsRequest, SkirtingRequest};
pub use uploads::{UploadListParams, UploadListResponse, UploadResponse};
