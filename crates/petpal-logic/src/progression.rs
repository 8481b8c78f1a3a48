//! XP curve, level roll-over, bond tiers and pet age stages.
//!
//! Level and bond tier are cached beside their sources in the saved game;
//! everything here recomputes them from the source values so the cache can
//! be checked or rebuilt at any time.
//!
//! ```
//! use petpal_logic::progression::{apply_xp, xp_for_level, BondTier};
//!
//! assert_eq!(xp_for_level(1), 100);
//! assert_eq!(xp_for_level(3), 200);
//!
//! let gain = apply_xp(1, 90, 20);
//! assert_eq!((gain.level, gain.xp, gain.levels_gained), (2, 10, 1));
//!
//! assert_eq!(BondTier::from_bond(21), BondTier::Acquaintance);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{age, limits};

/// XP needed to advance from `level` to `level + 1`.
pub fn xp_for_level(level: u32) -> u64 {
    100 + u64::from(level.saturating_sub(1)) * 50
}

/// Cumulative XP needed to reach `level` from level 1 with zero XP.
pub fn total_xp_for_level(level: u32) -> u64 {
    (1..level).map(xp_for_level).sum()
}

/// Outcome of adding XP to a (level, xp) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpGain {
    pub level: u32,
    pub xp: u64,
    pub levels_gained: u32,
}

/// Add `amount` XP and roll over as many levels as it pays for.
///
/// Stops at `MAX_LEVEL`; XP beyond that is kept but does nothing.
pub fn apply_xp(level: u32, xp: u64, amount: u64) -> XpGain {
    let mut level = level.max(1);
    let mut xp = xp.saturating_add(amount);
    let mut levels_gained = 0;

    while level < limits::MAX_LEVEL && xp >= xp_for_level(level) {
        xp -= xp_for_level(level);
        level += 1;
        levels_gained += 1;
    }

    XpGain {
        level,
        xp,
        levels_gained,
    }
}

/// Named relationship bracket derived from bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BondTier {
    /// 0–20
    Stranger,
    /// 21–40
    Acquaintance,
    /// 41–60
    Friend,
    /// 61–80
    BestFriend,
    /// 81–100
    Soulmate,
}

impl BondTier {
    pub fn from_bond(bond: u32) -> Self {
        match bond {
            0..=20 => BondTier::Stranger,
            21..=40 => BondTier::Acquaintance,
            41..=60 => BondTier::Friend,
            61..=80 => BondTier::BestFriend,
            _ => BondTier::Soulmate,
        }
    }

    /// Lowest bond value in this tier.
    pub fn min_bond(self) -> u32 {
        match self {
            BondTier::Stranger => 0,
            BondTier::Acquaintance => 21,
            BondTier::Friend => 41,
            BondTier::BestFriend => 61,
            BondTier::Soulmate => 81,
        }
    }
}

/// Add bond, capped at `MAX_BOND`.
pub fn apply_bond(bond: u32, amount: u32) -> u32 {
    bond.saturating_add(amount).min(limits::MAX_BOND)
}

/// Life stage of the pet by days since adoption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeStage {
    #[default]
    Puppy,
    Adult,
    Senior,
}

impl AgeStage {
    pub fn from_age_days(days: i64) -> Self {
        if days >= age::SENIOR_DAYS {
            AgeStage::Senior
        } else if days >= age::ADULT_DAYS {
            AgeStage::Adult
        } else {
            AgeStage::Puppy
        }
    }
}
