use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::prelude::PipelineStage;
use crate::signal::{DetectionResult, Series, SeriesRecord};

/// Element-wise squared amplitude. Total over every finite float; the result
/// is never negative.
pub fn square(amplitude: f64) -> f64 {
    amplitude * amplitude
}

/// One display point of the energy-like trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub timestamp: NaiveDateTime,
    pub amplitude: f64,
    pub amplitude_squared: f64,
}

/// Display shape consumed by the renderer: squared amplitude over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyTrace {
    pub points: Vec<TracePoint>,
}

impl EnergyTrace {
    /// Shapes the flagged subset for the event overlay scatter.
    pub fn from_detections(result: &DetectionResult) -> Self {
        Self {
            points: result.events.iter().map(trace_point).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn trace_point(record: &SeriesRecord) -> TracePoint {
    TracePoint {
        timestamp: record.timestamp,
        amplitude: record.amplitude,
        amplitude_squared: square(record.amplitude),
    }
}

/// Shapes a series into its squared-amplitude trace for the continuous line.
#[derive(Debug, Default)]
pub struct EnergyTransform;

impl EnergyTransform {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineStage for EnergyTransform {
    type Output = EnergyTrace;

    fn execute(&self, series: &Series) -> EnergyTrace {
        EnergyTrace {
            points: series.iter().map(trace_point).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(seconds: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, seconds)
            .unwrap()
    }

    #[test]
    fn square_of_negative_amplitude_is_positive() {
        assert_eq!(square(-3.0), 9.0);
        assert_eq!(square(0.0), 0.0);
        assert_eq!(square(2.5e-9), 6.25e-18);
    }

    #[test]
    fn transform_squares_every_record() {
        let series = Series::new(vec![
            SeriesRecord::new(ts(0), 2.0),
            SeriesRecord::new(ts(1), -4.0),
        ]);
        let trace = EnergyTransform::new().execute(&series);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.points[0].amplitude_squared, 4.0);
        assert_eq!(trace.points[1].amplitude_squared, 16.0);
        assert_eq!(trace.points[1].amplitude, -4.0);
    }

    #[test]
    fn overlay_carries_the_flagged_subset_only() {
        let result = DetectionResult::new(1.0, vec![SeriesRecord::new(ts(2), 3.0)]);
        let overlay = EnergyTrace::from_detections(&result);
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.points[0].amplitude_squared, 9.0);
        assert_eq!(overlay.points[0].timestamp, ts(2));
    }
}
