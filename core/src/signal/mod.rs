pub mod detection;
pub mod record;
pub mod window;

pub use detection::DetectionResult;
pub use record::{Series, SeriesRecord};
pub use window::TimeWindow;
