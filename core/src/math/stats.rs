/// Amplitude statistics backing the driver's range hints.
pub struct SignalStats;

impl SignalStats {
    /// Minimum and maximum amplitude, `None` for an empty series.
    pub fn bounds(samples: &[f64]) -> Option<(f64, f64)> {
        let mut values = samples.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        }))
    }

    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&value| value * value).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Slider default used by interactive callers: 10% of the maximum.
    pub fn default_threshold(samples: &[f64]) -> Option<f64> {
        Self::bounds(samples).map(|(_, max)| max * 0.1)
    }
}
