pub mod detector;
pub mod energy;
pub mod window;

pub use detector::EventDetector;
pub use energy::{square, EnergyTrace, EnergyTransform, TracePoint};
pub use window::WindowFilter;
