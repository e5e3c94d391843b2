use anyhow::Context;
use chrono::Duration;
use rand::{rngs::StdRng, Rng, SeedableRng};
use seiscore::signal::{Series, SeriesRecord};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::workflow::config::parse_bound;

/// Configuration for generating a synthetic velocity series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub cycles: f64,
    /// Peak velocity scale in m/s; defaults to a typical seismometer reading.
    pub peak_velocity: f64,
    pub noise: f64,
    pub seed: u64,
    pub start_time: String,
    pub sample_period_us: i64,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 2048,
            cycles: 32.0,
            peak_velocity: 5.0e-9,
            noise: 0.03,
            seed: 0,
            start_time: "2024-01-01T00:00:00.000000".to_string(),
            sample_period_us: 150_943,
            description: None,
            scenario: None,
        }
    }
}

impl GeneratorConfig {
    fn normalized_samples(&self) -> usize {
        self.samples.max(1)
    }
}

pub fn build_series_from_config(config: &GeneratorConfig) -> anyhow::Result<Series> {
    let start = parse_bound(&config.start_time).context("parsing generator start time")?;
    let samples = config.normalized_samples();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(samples);

    for index in 0..samples {
        let phase = (index as f64 / samples as f64) * 2.0 * PI * config.cycles;
        let envelope = 0.2 + 0.8 * (1.0 - index as f64 / samples as f64);
        let jitter = rng.gen_range(-config.noise..config.noise);
        let velocity = config.peak_velocity * (phase.sin() * envelope + jitter);
        let timestamp = start + Duration::microseconds(index as i64 * config.sample_period_us);
        records.push(SeriesRecord::new(timestamp, velocity));
    }

    Ok(Series::new(records))
}

pub fn build_demo_series(samples: usize) -> anyhow::Result<Series> {
    let config = GeneratorConfig {
        samples,
        ..Default::default()
    };
    build_series_from_config(&config)
}
