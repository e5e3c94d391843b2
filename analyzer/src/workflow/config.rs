use anyhow::Context;
use chrono::NaiveDateTime;
use seiscore::ingest::{TablePreview, TIME_FORMAT};
use seiscore::signal::TimeWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Analysis parameters an interactive shell or a YAML file supplies.
///
/// The window strings use the same fixed timestamp format as the input
/// table. A missing threshold is later defaulted from the data range.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub threshold: Option<f64>,
    pub window_start: Option<String>,
    pub window_end: Option<String>,
    pub preview_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            window_start: None,
            window_end: None,
            preview_rows: TablePreview::DEFAULT_ROWS,
        }
    }
}

impl AnalysisConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading analysis config {}", path_ref.display()))?;
        let config: AnalysisConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing analysis config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        threshold: Option<f64>,
        window_start: Option<String>,
        window_end: Option<String>,
    ) -> Self {
        Self {
            threshold,
            window_start,
            window_end,
            ..Default::default()
        }
    }

    /// Resolves the configured window, if any. Bounds must be supplied as a
    /// pair; an inverted pair is passed through untouched.
    pub fn to_window(&self) -> anyhow::Result<Option<TimeWindow>> {
        match (&self.window_start, &self.window_end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => {
                let start = parse_bound(start).context("parsing window start")?;
                let end = parse_bound(end).context("parsing window end")?;
                Ok(Some(TimeWindow::new(start, end)))
            }
            _ => anyhow::bail!("window start and end must be supplied together"),
        }
    }
}

pub fn parse_bound(value: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .with_context(|| format!("`{}` does not match {}", value, TIME_FORMAT))
}
