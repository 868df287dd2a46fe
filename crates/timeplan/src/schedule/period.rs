//! The institutional period-to-clock-time convention.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Maps class period indices (1, 2, 3, ...) to wall-clock intervals.
///
/// The observed convention is period 1 starting at 09:00 with one-hour
/// periods, but the mapping varies by institution, so it is configuration
/// passed into the parser rather than a constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodTable {
    /// Hour of day at which period 1 begins.
    pub start_hour: u32,
    /// Length of one period in minutes.
    pub period_minutes: u32,
    /// Number of periods in the academic day.
    pub period_count: u32,
}

impl Default for PeriodTable {
    fn default() -> Self {
        PeriodTable {
            start_hour: 9,
            period_minutes: 60,
            period_count: 12,
        }
    }
}

impl PeriodTable {
    /// Start of the given 1-based period, or `None` if the period is
    /// outside the table or would run past midnight.
    pub fn start_of(&self, period: u32) -> Option<NaiveTime> {
        if period == 0 || period > self.period_count {
            return None;
        }
        self.at_offset((period - 1) * self.period_minutes)
    }

    /// End of the given 1-based period.
    pub fn end_of(&self, period: u32) -> Option<NaiveTime> {
        if period == 0 || period > self.period_count {
            return None;
        }
        self.at_offset(period * self.period_minutes)
    }

    fn at_offset(&self, minutes: u32) -> Option<NaiveTime> {
        let total = self.start_hour * 60 + minutes;
        NaiveTime::from_hms_opt(total / 60, total % 60, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_table_matches_convention() {
        let table = PeriodTable::default();
        assert_eq!(table.start_of(1), Some(hm(9, 0)));
        assert_eq!(table.end_of(1), Some(hm(10, 0)));
        assert_eq!(table.start_of(2), Some(hm(10, 0)));
        assert_eq!(table.end_of(3), Some(hm(12, 0)));
        assert_eq!(table.start_of(12), Some(hm(20, 0)));
        assert_eq!(table.end_of(12), Some(hm(21, 0)));
    }

    #[test]
    fn test_out_of_range_periods() {
        let table = PeriodTable::default();
        assert_eq!(table.start_of(0), None);
        assert_eq!(table.start_of(13), None);
        assert_eq!(table.end_of(99), None);
    }

    #[test]
    fn test_custom_table() {
        // 50-minute periods starting at 08:00
        let table = PeriodTable {
            start_hour: 8,
            period_minutes: 50,
            period_count: 10,
        };
        assert_eq!(table.start_of(1), Some(hm(8, 0)));
        assert_eq!(table.end_of(1), Some(hm(8, 50)));
        assert_eq!(table.start_of(3), Some(hm(9, 40)));
    }

    #[test]
    fn test_past_midnight_is_rejected() {
        let table = PeriodTable {
            start_hour: 22,
            period_minutes: 60,
            period_count: 5,
        };
        assert_eq!(table.start_of(1), Some(hm(22, 0)));
        assert_eq!(table.end_of(2), None);
    }
}
