use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Inclusive timestamp range used to restrict analysis.
///
/// `start > end` is legal and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Both bounds inclusive.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(0, 0, 0, micro)
            .unwrap()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = TimeWindow::new(ts(10), ts(20));
        assert!(window.contains(ts(10)));
        assert!(window.contains(ts(20)));
        assert!(!window.contains(ts(9)));
        assert!(!window.contains(ts(21)));
    }

    #[test]
    fn inverted_window_contains_nothing() {
        let window = TimeWindow::new(ts(20), ts(10));
        assert!(!window.contains(ts(15)));
        assert!(!window.contains(ts(10)));
        assert!(!window.contains(ts(20)));
    }
}
