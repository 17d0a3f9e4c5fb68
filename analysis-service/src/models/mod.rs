pub mod analysis;
pub mod blueprint;

pub use analysis::AnalysisRecord;
pub use blueprint::BlueprintSummary;
