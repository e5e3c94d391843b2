use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One sample of the ingested velocity signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Absolute sample time, microsecond resolution, no timezone.
    pub timestamp: NaiveDateTime,
    /// Raw signed velocity in m/s.
    pub amplitude: f64,
}

impl SeriesRecord {
    pub fn new(timestamp: NaiveDateTime, amplitude: f64) -> Self {
        Self {
            timestamp,
            amplitude,
        }
    }
}

/// Ordered sequence of samples, kept in input order (never re-sorted).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub records: Vec<SeriesRecord>,
}

impl Series {
    pub fn new(records: Vec<SeriesRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesRecord> {
        self.records.iter()
    }

    /// Amplitudes in series order, for the stats helpers.
    pub fn amplitudes(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.amplitude).collect()
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
    fn series_exposes_amplitudes_in_order() {
        let series = Series::new(vec![
            SeriesRecord::new(ts(0), 0.1),
            SeriesRecord::new(ts(1), -0.4),
        ]);
        assert_eq!(series.amplitudes(), vec![0.1, -0.4]);
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }
}
