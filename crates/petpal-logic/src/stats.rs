//! The five bounded wellbeing stats and the deltas applied to them.
//!
//! Every write path funnels through [`clamp_stat`], so a [`StatVector`] can
//! never hold a value outside `0..=100`.
//!
//! ```
//! use petpal_logic::stats::{Stat, StatDelta, StatVector};
//!
//! let mut stats = StatVector::splat(90);
//! stats.apply(&StatDelta::single(Stat::Hunger, 40));
//! assert_eq!(stats.hunger, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{initial, limits};

/// One of the pet's wellbeing stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Hunger,
    Thirst,
    Happiness,
    Energy,
    Hygiene,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 5] = [
        Stat::Hunger,
        Stat::Thirst,
        Stat::Happiness,
        Stat::Energy,
        Stat::Hygiene,
    ];
}

/// Round to the nearest integer and clamp into `[STAT_MIN, STAT_MAX]`.
pub fn clamp_stat(value: f64) -> u8 {
    if value.is_nan() {
        return limits::STAT_MIN;
    }
    value
        .round()
        .clamp(f64::from(limits::STAT_MIN), f64::from(limits::STAT_MAX)) as u8
}

/// Current wellbeing values, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatVector {
    pub hunger: u8,
    pub thirst: u8,
    pub happiness: u8,
    pub energy: u8,
    pub hygiene: u8,
}

impl Default for StatVector {
    fn default() -> Self {
        Self::splat(initial::STAT)
    }
}

impl StatVector {
    /// All five stats set to the same (clamped) value.
    pub fn splat(value: u8) -> Self {
        let v = value.min(limits::STAT_MAX);
        Self {
            hunger: v,
            thirst: v,
            happiness: v,
            energy: v,
            hygiene: v,
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Happiness => self.happiness,
            Stat::Energy => self.energy,
            Stat::Hygiene => self.hygiene,
        }
    }

    /// Set a stat, clamping to the valid range.
    pub fn set(&mut self, stat: Stat, value: f64) {
        let slot = match stat {
            Stat::Hunger => &mut self.hunger,
            Stat::Thirst => &mut self.thirst,
            Stat::Happiness => &mut self.happiness,
            Stat::Energy => &mut self.energy,
            Stat::Hygiene => &mut self.hygiene,
        };
        *slot = clamp_stat(value);
    }

    /// Add a signed amount to one stat, clamped.
    pub fn adjust(&mut self, stat: Stat, amount: i32) {
        let next = f64::from(self.get(stat)) + f64::from(amount);
        self.set(stat, next);
    }

    /// Apply every component of a delta, clamped.
    pub fn apply(&mut self, delta: &StatDelta) {
        for stat in Stat::ALL {
            let amount = delta.get(stat);
            if amount != 0 {
                self.adjust(stat, amount);
            }
        }
    }

    /// True when every stat is at least `threshold`.
    pub fn all_at_least(&self, threshold: u8) -> bool {
        Stat::ALL.iter().all(|s| self.get(*s) >= threshold)
    }
}

/// A signed change to some subset of stats. Zero means "untouched".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    pub hunger: i32,
    pub thirst: i32,
    pub happiness: i32,
    pub energy: i32,
    pub hygiene: i32,
}

impl StatDelta {
    pub const ZERO: StatDelta = StatDelta {
        hunger: 0,
        thirst: 0,
        happiness: 0,
        energy: 0,
        hygiene: 0,
    };

    /// A delta touching exactly one stat.
    pub fn single(stat: Stat, amount: i32) -> Self {
        let mut delta = Self::ZERO;
        delta.set(stat, amount);
        delta
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Happiness => self.happiness,
            Stat::Energy => self.energy,
            Stat::Hygiene => self.hygiene,
        }
    }

    pub fn set(&mut self, stat: Stat, amount: i32) {
        match stat {
            Stat::Hunger => self.hunger = amount,
            Stat::Thirst => self.thirst = amount,
            Stat::Happiness => self.happiness = amount,
            Stat::Energy => self.energy = amount,
            Stat::Hygiene => self.hygiene = amount,
        }
    }
}
