use std::fmt;

use crate::ingest::loader::{TIME_COLUMN, TIME_FORMAT, VELOCITY_COLUMN};
use crate::signal::Series;

/// Display-only rendering of the first rows of a loaded table.
///
/// Interactive callers show this after a successful load; it is not part of
/// the data contract and non-interactive callers simply skip it.
#[derive(Debug, Clone)]
pub struct TablePreview {
    lines: Vec<(String, String)>,
    total: usize,
}

impl TablePreview {
    pub const DEFAULT_ROWS: usize = 5;

    pub fn from_series(series: &Series, rows: usize) -> Self {
        let lines = series
            .iter()
            .take(rows)
            .map(|record| {
                (
                    record.timestamp.format(TIME_FORMAT).to_string(),
                    format!("{:e}", record.amplitude),
                )
            })
            .collect();
        Self {
            lines,
            total: series.len(),
        }
    }
}

impl fmt::Display for TablePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{}", TIME_COLUMN, VELOCITY_COLUMN)?;
        for (timestamp, velocity) in &self.lines {
            writeln!(f, "{},{}", timestamp, velocity)?;
        }
        write!(f, "({} rows total)", self.total)
    }
}
