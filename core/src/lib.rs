//! Core loading, validation and event-detection pipeline for the seismic
//! velocity analyzer.
//!
//! The modules mirror the interactive analysis workflow while providing
//! strict schema validation and well-defined pure stages.

pub mod ingest;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod signal;
pub mod telemetry;

pub use prelude::{LoadError, LoadResult, PipelineStage};
