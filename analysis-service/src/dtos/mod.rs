pub mod analysis;
pub mod chat;
pub mod voice;

pub use analysis::{
    AnalyzeImageResponse, DimensionsDto, FullAnalyzeParams, FullAnalyzeResponse, ImageInfoResponse,
};
pub use chat::{ChatMessageDto, ChatRequest, ChatResponse};
pub use voice::{TranscribeResponse, VoiceCommandDto};
