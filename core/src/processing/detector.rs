use crate::math::stats::SignalStats;
use crate::prelude::PipelineStage;
use crate::signal::{DetectionResult, Series};
use crate::telemetry::log::StageLog;

/// Flags samples whose signed amplitude strictly exceeds the threshold.
///
/// The comparison runs on the raw signed velocity: a sample equal to the
/// threshold is not an event, and a large negative excursion never qualifies
/// regardless of its magnitude.
pub struct EventDetector {
    threshold: f64,
    logger: StageLog,
}

impl EventDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            logger: StageLog::for_stage("detector"),
        }
    }
}

impl PipelineStage for EventDetector {
    type Output = DetectionResult;

    fn execute(&self, series: &Series) -> DetectionResult {
        let events: Vec<_> = series
            .iter()
            .filter(|record| record.amplitude > self.threshold)
            .cloned()
            .collect();

        let rms = SignalStats::rms(&series.amplitudes());
        self.logger.record(format!(
            "flagged {} of {} samples (threshold {:.3e}, amplitude RMS {:.3e})",
            events.len(),
            series.len(),
            self.threshold,
            rms
        ));
        DetectionResult::new(self.threshold, events)
    }
}
