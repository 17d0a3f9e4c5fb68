pub mod blueprint;
pub mod database;
pub mod dimensions;
pub mod metrics;
pub mod ocr;
pub mod providers;
pub mod voice;

pub use database::Database;
pub use metrics::{get_metrics, init_metrics};
pub use ocr::{CommandExecutor, MockOcr, TesseractOcr, TextExtractor};
