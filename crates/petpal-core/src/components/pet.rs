//! The adopted pet and its progression numbers.

use petpal_logic::constants::initial;
use petpal_logic::progression::{xp_for_level, BondTier};
use serde::{Deserialize, Serialize};

/// Identity of the adopted pet. Set once at onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    pub breed_id: String,
    pub name: String,
    /// Adoption time, epoch millis.
    pub created_at: i64,
}

/// XP, level, coins and bond.
///
/// `level` and `bond_tier` are caches of `xp` and `bond`; only the ledger
/// system writes them, always together with their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub xp: u64,
    pub level: u32,
    pub coins: u64,
    pub bond: u32,
    pub bond_tier: BondTier,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            xp: initial::XP,
            level: initial::LEVEL,
            coins: initial::COINS,
            bond: initial::BOND,
            bond_tier: BondTier::from_bond(initial::BOND),
        }
    }
}

impl Progression {
    /// XP still needed for the next level.
    pub fn xp_to_next_level(&self) -> u64 {
        xp_for_level(self.level).saturating_sub(self.xp)
    }

    /// Whether the cached tier agrees with bond.
    pub fn is_consistent(&self) -> bool {
        self.bond_tier == BondTier::from_bond(self.bond)
    }
}
