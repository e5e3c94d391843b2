use crate::workflow::config::AnalysisConfig;
use anyhow::Context;
use seiscore::math::SignalStats;
use seiscore::prelude::PipelineStage;
use seiscore::processing::{EnergyTrace, EnergyTransform, EventDetector, WindowFilter};
use seiscore::signal::{DetectionResult, Series, TimeWindow};

/// Everything one pipeline invocation hands to the caller: the filtered
/// series, the flagged subset, and both renderer-facing traces.
pub struct AnalysisResult {
    pub filtered: Series,
    pub detections: DetectionResult,
    pub trace: EnergyTrace,
    pub event_overlay: EnergyTrace,
    pub amplitude_bounds: Option<(f64, f64)>,
    pub threshold: f64,
    pub notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: AnalysisConfig,
}

impl Runner {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, series: &Series) -> anyhow::Result<AnalysisResult> {
        let window = self.config.to_window().context("resolving analysis window")?;
        let threshold = match self.config.threshold {
            Some(value) => value,
            None => SignalStats::default_threshold(&series.amplitudes())
                .context("deriving a default threshold from an empty series")?,
        };
        Ok(self.execute_with(series, threshold, window))
    }

    /// Re-runs the pure pipeline with explicit parameters, as interactive
    /// callers do on every threshold or window change. The loaded series is
    /// never touched; failures upstream leave it valid for retry.
    pub fn execute_with(
        &self,
        series: &Series,
        threshold: f64,
        window: Option<TimeWindow>,
    ) -> AnalysisResult {
        let mut notes = Vec::new();

        let filtered = match window {
            Some(window) => WindowFilter::new(window).execute(series),
            None => series.clone(),
        };
        if filtered.is_empty() {
            notes.push("no samples inside the selected time range".to_string());
        }

        let detections = EventDetector::new(threshold).execute(&filtered);
        if detections.is_empty() {
            notes.push(format!("no events above threshold {:.3e}", threshold));
        }

        let trace = EnergyTransform::new().execute(&filtered);
        let event_overlay = EnergyTrace::from_detections(&detections);
        let amplitude_bounds = SignalStats::bounds(&filtered.amplitudes());

        AnalysisResult {
            filtered,
            detections,
            trace,
            event_overlay,
            amplitude_bounds,
            threshold,
            notes,
        }
    }
}
