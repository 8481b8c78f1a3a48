//! Game constants - stat limits, decay rates, starting values, cooldowns.
//!
//! Plain numeric constants with no storage dependency. Both the engine and
//! the headless simtest read these.

/// Save/schema version stamped into every persisted game.
pub const GAME_VERSION: u32 = 1;

pub mod limits {
    pub const STAT_MIN: u8 = 0;
    pub const STAT_MAX: u8 = 100;
    /// Below this a stat shows a warning.
    pub const STAT_WARNING_THRESHOLD: u8 = 30;
    /// Below this a stat is critical.
    pub const STAT_CRITICAL_THRESHOLD: u8 = 20;
    pub const MAX_LEVEL: u32 = 20;
    pub const MAX_BOND: u32 = 100;
}

/// Stat loss per hour before breed multipliers.
pub mod decay_rates {
    pub const HUNGER: f64 = 8.0;
    pub const THIRST: f64 = 10.0;
    pub const HAPPINESS: f64 = 5.0;
    pub const ENERGY: f64 = 4.0;
    pub const HYGIENE: f64 = 3.0;
}

pub mod initial {
    pub const STAT: u8 = 80;
    pub const COINS: u64 = 50;
    pub const XP: u64 = 0;
    pub const LEVEL: u32 = 1;
    pub const BOND: u32 = 0;
}

pub mod time {
    pub const MS_PER_SECOND: i64 = 1_000;
    pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
    pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
    pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

    /// Offline decay never covers more than this many hours.
    pub const MAX_OFFLINE_DECAY_HOURS: f64 = 24.0;
    /// A clock that jumps backwards by more than this is an anomaly.
    pub const CLOCK_SKEW_TOLERANCE_MS: i64 = 60 * MS_PER_SECOND;
    /// Offline hours required before a login event may roll.
    pub const LOGIN_EVENT_MIN_HOURS: f64 = 1.0;
}

pub mod cooldowns {
    use super::time::{MS_PER_MINUTE, MS_PER_SECOND};

    /// Shared by every random event trigger.
    pub const RANDOM_EVENT_MS: i64 = 5 * MS_PER_MINUTE;
    /// Shared by every trick.
    pub const TRICK_MS: i64 = 30 * MS_PER_SECOND;
    /// Per action kind.
    pub const ACTION_THROTTLE_MS: i64 = MS_PER_SECOND;
}

pub mod rewards {
    /// Coins granted by an `add_xp` call that gains at least one level.
    pub const LEVEL_UP_COINS: u64 = 50;
    /// Bond granted by every successful trick.
    pub const TRICK_BOND: u32 = 1;
}

pub mod tasks {
    pub const DAILY_TASK_COUNT: usize = 3;
}

/// Pet age thresholds in whole days since adoption.
pub mod age {
    pub const ADULT_DAYS: i64 = 30;
    pub const SENIOR_DAYS: i64 = 90;
}
