use seiscore::processing::EnergyTrace;
use serde::{Deserialize, Serialize};

use crate::workflow::runner::AnalysisResult;

/// Renderer-facing payload: the squared-amplitude line plus the flagged
/// overlay, ready to plot as-is.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub trace: EnergyTrace,
    pub event_overlay: EnergyTrace,
    pub detection_count: usize,
    pub threshold: f64,
    pub notes: Vec<String>,
}

impl VisualizationModel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            trace: result.trace.clone(),
            event_overlay: result.event_overlay.clone(),
            detection_count: result.detections.len(),
            threshold: result.threshold,
            notes: result.notes.clone(),
        }
    }
}

/// Parameters an interactive caller posts to re-run the pipeline. The window
/// bounds arrive as strings in the fixed timestamp format, exactly as a UI
/// hands them over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub threshold: f64,
    pub start: String,
    pub end: String,
}
