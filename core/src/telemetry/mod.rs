pub mod log;
pub mod metrics;

pub use log::StageLog;
pub use metrics::AnalysisMetrics;
