use serde::{Deserialize, Serialize};

use crate::signal::SeriesRecord;

/// Samples flagged above a detection threshold, in source order.
///
/// Recomputed fresh on every threshold or window change; an empty result
/// means "no events", never a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub threshold: f64,
    pub events: Vec<SeriesRecord>,
}

impl DetectionResult {
    pub fn new(threshold: f64, events: Vec<SeriesRecord>) -> Self {
        Self { threshold, events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
