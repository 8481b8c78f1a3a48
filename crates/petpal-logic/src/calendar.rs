//! Calendar-day arithmetic for resets and streaks.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Whether `later` is exactly one calendar day after `earlier`.
pub fn is_day_after(earlier: NaiveDate, later: NaiveDate) -> bool {
    days_between(earlier, later) == 1
}

/// Whole days from `from` to `to`, negative if `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-03-13 is a Wednesday.
        assert_eq!(week_start(d(2024, 3, 13)), d(2024, 3, 11));
        assert_eq!(week_start(d(2024, 3, 11)), d(2024, 3, 11));
        // Sunday belongs to the week that started six days earlier.
        assert_eq!(week_start(d(2024, 3, 17)), d(2024, 3, 11));
        assert_eq!(week_start(d(2024, 3, 18)), d(2024, 3, 18));
    }

    #[test]
    fn test_week_start_across_year() {
        assert_eq!(week_start(d(2025, 1, 1)), d(2024, 12, 30));
    }

    #[test]
    fn test_day_after() {
        assert!(is_day_after(d(2024, 2, 28), d(2024, 2, 29)));
        assert!(is_day_after(d(2024, 12, 31), d(2025, 1, 1)));
        assert!(!is_day_after(d(2024, 3, 1), d(2024, 3, 1)));
        assert!(!is_day_after(d(2024, 3, 1), d(2024, 3, 3)));
        assert!(!is_day_after(d(2024, 3, 2), d(2024, 3, 1)));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 31)), 30);
        assert_eq!(days_between(d(2024, 1, 2), d(2024, 1, 1)), -1);
    }
}
