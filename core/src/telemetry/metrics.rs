use std::sync::Mutex;

/// Counters sampled by the driver's bridge endpoint.
pub struct AnalysisMetrics {
    inner: Mutex<Counters>,
}

struct Counters {
    analyses: usize,
    events_flagged: usize,
    errors: usize,
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                analyses: 0,
                events_flagged: 0,
                errors: 0,
            }),
        }
    }

    pub fn record_analysis(&self, event_count: usize) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.analyses += 1;
            counters.events_flagged += event_count;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.analyses, counters.events_flagged, counters.errors)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for AnalysisMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_accumulate_analyses_and_errors() {
        let metrics = AnalysisMetrics::new();
        metrics.record_analysis(3);
        metrics.record_analysis(0);
        metrics.record_error();
        assert_eq!(metrics.snapshot(), (2, 3, 1));
    }
}
