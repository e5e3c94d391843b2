use crate::prelude::PipelineStage;
use crate::signal::{Series, TimeWindow};
use crate::telemetry::log::StageLog;

/// Restricts a series to an inclusive timestamp range.
///
/// The window bounds are taken as supplied; an inverted window yields an
/// empty series rather than an error.
pub struct WindowFilter {
    window: TimeWindow,
    logger: StageLog,
}

impl WindowFilter {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            logger: StageLog::for_stage("window"),
        }
    }
}

impl PipelineStage for WindowFilter {
    type Output = Series;

    fn execute(&self, series: &Series) -> Series {
        let records: Vec<_> = series
            .iter()
            .filter(|record| self.window.contains(record.timestamp))
            .cloned()
            .collect();

        self.logger.record(format!(
            "retained {} of {} samples",
            records.len(),
            series.len()
        ));
        Series::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SeriesRecord;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(0, 0, 0, micro)
            .unwrap()
    }

    fn series() -> Series {
        Series::new(vec![
            SeriesRecord::new(ts(9), 0.1),
            SeriesRecord::new(ts(10), 0.2),
            SeriesRecord::new(ts(15), 0.3),
            SeriesRecord::new(ts(20), 0.4),
            SeriesRecord::new(ts(21), 0.5),
        ])
    }

    #[test]
    fn filter_includes_records_exactly_on_both_bounds() {
        let filtered = WindowFilter::new(TimeWindow::new(ts(10), ts(20))).execute(&series());
        let times: Vec<_> = filtered.iter().map(|r| r.timestamp).collect();
        assert_eq!(times, vec![ts(10), ts(15), ts(20)]);
    }

    #[test]
    fn filter_excludes_records_one_microsecond_outside() {
        let filtered = WindowFilter::new(TimeWindow::new(ts(10), ts(20))).execute(&series());
        assert!(filtered.iter().all(|r| r.timestamp != ts(9)));
        assert!(filtered.iter().all(|r| r.timestamp != ts(21)));
    }

    #[test]
    fn inverted_window_yields_empty_series_not_error() {
        let filtered = WindowFilter::new(TimeWindow::new(ts(20), ts(10))).execute(&series());
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_preserves_order_and_leaves_input_untouched() {
        let input = series();
        let before = input.clone();
        let filtered = WindowFilter::new(TimeWindow::new(ts(0), ts(30))).execute(&input);
        assert_eq!(input, before);
        assert_eq!(filtered, before);
    }
}
