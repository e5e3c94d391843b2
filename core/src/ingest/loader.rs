use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};

use crate::prelude::{LoadError, LoadResult};
use crate::signal::{Series, SeriesRecord};
use crate::telemetry::log::StageLog;

/// Literal header names the input table must carry.
pub const TIME_COLUMN: &str = "time_abs(%Y-%m-%dT%H:%M:%S.%f)";
pub const VELOCITY_COLUMN: &str = "velocity(m/s)";

/// Fixed timestamp layout: microsecond precision, no timezone.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// CSV loader that validates the schema up front and refuses partial parses.
///
/// Any value that fails to parse fails the whole load; a series is never
/// returned with rows missing or coerced.
pub struct SeriesLoader {
    logger: StageLog,
}

impl SeriesLoader {
    pub fn new() -> Self {
        Self {
            logger: StageLog::for_stage("loader"),
        }
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> LoadResult<Series> {
        let file = File::open(path)?;
        self.load(file)
    }

    pub fn load<R: Read>(&self, reader: R) -> LoadResult<Series> {
        let mut table = ReaderBuilder::new().has_headers(true).from_reader(reader);

        // Schema check runs once, before any row is parsed.
        let headers = table.headers()?.clone();
        let time_index = column_index(&headers, TIME_COLUMN)?;
        let velocity_index = column_index(&headers, VELOCITY_COLUMN)?;

        let mut records = Vec::new();
        for (index, row) in table.records().enumerate() {
            let row = row?;
            // Header occupies line 1 of the file.
            let line = index + 2;

            let raw_time = row.get(time_index).unwrap_or_default();
            let timestamp =
                NaiveDateTime::parse_from_str(raw_time, TIME_FORMAT).map_err(|_| {
                    LoadError::Parse {
                        row: line,
                        column: TIME_COLUMN,
                        value: raw_time.to_string(),
                    }
                })?;

            let raw_velocity = row.get(velocity_index).unwrap_or_default();
            let amplitude: f64 = raw_velocity.trim().parse().map_err(|_| LoadError::Parse {
                row: line,
                column: VELOCITY_COLUMN,
                value: raw_velocity.to_string(),
            })?;

            records.push(SeriesRecord::new(timestamp, amplitude));
        }

        self.logger
            .record(format!("loaded {} samples", records.len()));
        Ok(Series::new(records))
    }
}

impl Default for SeriesLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn column_index(headers: &StringRecord, name: &str) -> LoadResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| LoadError::Schema(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "time_abs(%Y-%m-%dT%H:%M:%S.%f),velocity(m/s)";

    fn load_str(input: &str) -> LoadResult<Series> {
        SeriesLoader::new().load(input.as_bytes())
    }

    #[test]
    fn load_parses_timestamps_and_amplitudes() {
        let input = format!(
            "{}\n2024-01-01T00:00:00.000000,1.5e-9\n2024-01-01T00:00:00.150943,-2.5e-9\n",
            HEADER
        );
        let series = load_str(&input).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.records[0].amplitude, 1.5e-9);
        assert_eq!(series.records[1].amplitude, -2.5e-9);
        assert_eq!(
            series.records[1].timestamp.format(TIME_FORMAT).to_string(),
            "2024-01-01T00:00:00.150943"
        );
    }

    #[test]
    fn load_tolerates_extra_columns_in_any_order() {
        let input = "station,velocity(m/s),time_abs(%Y-%m-%dT%H:%M:%S.%f)\n\
                     S12,3.0e-9,2024-01-01T00:00:00.000000\n";
        let series = load_str(input).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.records[0].amplitude, 3.0e-9);
    }

    #[test]
    fn missing_velocity_column_is_schema_error() {
        let input = "time_abs(%Y-%m-%dT%H:%M:%S.%f),speed\n2024-01-01T00:00:00.000000,1.0\n";
        let err = load_str(input).unwrap_err();
        assert!(matches!(err, LoadError::Schema(name) if name == VELOCITY_COLUMN));
    }

    #[test]
    fn missing_time_column_is_schema_error() {
        let input = "when,velocity(m/s)\n2024-01-01T00:00:00.000000,1.0\n";
        let err = load_str(input).unwrap_err();
        assert!(matches!(err, LoadError::Schema(name) if name == TIME_COLUMN));
    }

    #[test]
    fn schema_is_checked_before_any_row_parsing() {
        // The broken row must never be reached.
        let input = "when,velocity(m/s)\nnot-a-timestamp,garbage\n";
        let err = load_str(input).unwrap_err();
        assert!(matches!(err, LoadError::Schema(_)));
    }

    #[test]
    fn malformed_timestamp_fails_whole_load() {
        let input = format!(
            "{}\n2024-01-01T00:00:00.000000,1.0e-9\n2024-01-01 00:00:01,2.0e-9\n",
            HEADER
        );
        let err = load_str(&input).unwrap_err();
        match err {
            LoadError::Parse { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, TIME_COLUMN);
                assert_eq!(value, "2024-01-01 00:00:01");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn truncated_fraction_fails_whole_load() {
        let input = format!("{}\n2024-01-01T00:00:00.123,1.0e-9\n", HEADER);
        let err = load_str(&input).unwrap_err();
        assert!(matches!(err, LoadError::Parse { column, .. } if column == TIME_COLUMN));
    }

    #[test]
    fn non_numeric_velocity_fails_whole_load() {
        let input = format!("{}\n2024-01-01T00:00:00.000000,fast\n", HEADER);
        let err = load_str(&input).unwrap_err();
        assert!(matches!(err, LoadError::Parse { column, .. } if column == VELOCITY_COLUMN));
    }
}
