//! Seasonal themes keyed by month/day windows.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalEvent {
    pub id: &'static str,
    pub name_key: &'static str,
    pub theme: &'static str,
    /// Inclusive (month, day). A start after the end wraps the new year.
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl SeasonalEvent {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let md = (date.month(), date.day());
        if self.start > self.end {
            md >= self.start || md <= self.end
        } else {
            md >= self.start && md <= self.end
        }
    }
}

pub const SEASONAL_EVENTS: [SeasonalEvent; 5] = [
    SeasonalEvent {
        id: "newyear",
        name_key: "events.newyear",
        theme: "winter",
        start: (12, 25),
        end: (1, 5),
    },
    SeasonalEvent {
        id: "valentine",
        name_key: "events.valentine",
        theme: "love",
        start: (2, 10),
        end: (2, 18),
    },
    SeasonalEvent {
        id: "spring",
        name_key: "events.spring",
        theme: "spring",
        start: (3, 20),
        end: (4, 5),
    },
    SeasonalEvent {
        id: "summer",
        name_key: "events.summer",
        theme: "summer",
        start: (6, 20),
        end: (7, 10),
    },
    SeasonalEvent {
        id: "halloween",
        name_key: "events.halloween",
        theme: "spooky",
        start: (10, 25),
        end: (11, 2),
    },
];

pub fn current_seasonal_event(date: NaiveDate) -> Option<&'static SeasonalEvent> {
    SEASONAL_EVENTS.iter().find(|e| e.contains(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(m: u32, d: u32) -> Option<&'static str> {
        let date = NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        current_seasonal_event(date).map(|e| e.id)
    }

    #[test]
    fn test_new_year_wraps() {
        assert_eq!(on(12, 24), None);
        assert_eq!(on(12, 25), Some("newyear"));
        assert_eq!(on(12, 31), Some("newyear"));
        assert_eq!(on(1, 1), Some("newyear"));
        assert_eq!(on(1, 5), Some("newyear"));
        assert_eq!(on(1, 6), None);
    }

    #[test]
    fn test_plain_windows() {
        assert_eq!(on(2, 14), Some("valentine"));
        assert_eq!(on(4, 5), Some("spring"));
        assert_eq!(on(7, 11), None);
        assert_eq!(on(10, 31), Some("halloween"));
        assert_eq!(on(11, 2), Some("halloween"));
        assert_eq!(on(8, 15), None);
    }
}
