pub mod chat;
pub mod upload;

pub use chat::ChatMessage;
pub use upload::UploadRecord;
