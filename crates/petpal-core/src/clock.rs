//! Wall-clock boundary.
//!
//! Transitions never read the system clock themselves; they receive a
//! [`GameTime`] from whoever drives them. Elapsed-time and cooldown math uses
//! `millis`, calendar resets and streaks use the local `date`.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    /// Milliseconds since the Unix epoch.
    pub millis: i64,
    /// Local calendar date at `millis`.
    pub date: NaiveDate,
}

impl GameTime {
    /// Interpret a naive date-time as both the instant and the local date.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            millis: dt.and_utc().timestamp_millis(),
            date: dt.date(),
        }
    }
}

pub trait Clock {
    fn now(&self) -> GameTime;
}

/// The device clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> GameTime {
        let now = Local::now();
        GameTime {
            millis: now.timestamp_millis(),
            date: now.date_naive(),
        }
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: NaiveDateTime,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: start }
    }

    pub fn set(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn advance_hours(&mut self, hours: i64) {
        self.advance(Duration::hours(hours));
    }

    pub fn advance_days(&mut self, days: i64) {
        self.advance(Duration::days(days));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> GameTime {
        GameTime::from_naive(self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_manual_clock_crosses_midnight() {
        let mut clock = ManualClock::new(start());
        let before = clock.now();
        clock.advance_hours(3);
        let after = clock.now();

        assert_eq!(after.millis - before.millis, 3 * 3_600_000);
        assert_eq!(after.date, before.date.succ_opt().unwrap());
    }

    #[test]
    fn test_manual_clock_can_go_backwards() {
        let mut clock = ManualClock::new(start());
        let before = clock.now();
        clock.advance(Duration::minutes(-5));
        assert!(clock.now().millis < before.millis);
    }
}
