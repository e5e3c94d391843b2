pub mod loader;
pub mod preview;

pub use loader::{SeriesLoader, TIME_COLUMN, TIME_FORMAT, VELOCITY_COLUMN};
pub use preview::TablePreview;
