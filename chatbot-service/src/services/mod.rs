pub mod analysis;
pub mod database;
pub mod deck;
pub mod metrics;
pub mod storage;

pub use analysis::AnalysisClient;
pub use database::Database;
pub use metrics::{get_metrics, init_metrics};
pub use storage::{LocalStorage, Storage};
