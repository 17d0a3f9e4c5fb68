pub mod analyze;
pub mod chat;
pub mod deck;
pub mod health;
pub mod uploads;

pub use analyze::{analyze_image, bot_query};
pub use chat::{chat, session_history};
pub use deck::{deck_materials, deck_skirting};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use uploads::{download_upload, list_uploads, upload};
