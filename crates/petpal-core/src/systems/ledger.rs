//! Progression ledger: XP and levels, bond and tier, coins.
//!
//! These are the only functions that write `Progression`, so the cached
//! level and tier are always recomputed together with their sources.

use petpal_logic::constants::rewards;
use petpal_logic::progression::{apply_bond, apply_xp, BondTier};
use petpal_logic::tasks::TaskEvent;

use crate::components::{GameState, Statistic};
use crate::systems::advance_tasks;

/// Result of an XP grant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XpOutcome {
    pub levels_gained: u32,
    /// Level-up bonus paid, zero when no level was gained.
    pub bonus_coins: u64,
}

impl XpOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Add XP, rolling over as many levels as it pays for.
///
/// A grant that gains one or more levels pays the level-up bonus once.
pub fn add_xp(state: &mut GameState, amount: u64) -> XpOutcome {
    if amount == 0 {
        return XpOutcome::default();
    }
    let p = &mut state.progression;
    let gain = apply_xp(p.level, p.xp, amount);
    p.level = gain.level;
    p.xp = gain.xp;

    if gain.levels_gained == 0 {
        return XpOutcome::default();
    }

    log::info!(
        "Level up: now level {} (+{} levels)",
        gain.level,
        gain.levels_gained
    );
    add_coins(state, rewards::LEVEL_UP_COINS);
    XpOutcome {
        levels_gained: gain.levels_gained,
        bonus_coins: rewards::LEVEL_UP_COINS,
    }
}

/// Add bond (capped) and recompute the tier.
///
/// The weekly bond task advances by the raw amount, even past the cap.
/// Returns the new tier when it changed.
pub fn add_bond(state: &mut GameState, amount: u32) -> Option<BondTier> {
    if amount == 0 {
        return None;
    }
    let p = &mut state.progression;
    let before = p.bond_tier;
    p.bond = apply_bond(p.bond, amount);
    p.bond_tier = BondTier::from_bond(p.bond);
    let after = p.bond_tier;

    advance_tasks(state, TaskEvent::Bond, amount);

    if after != before {
        log::info!("Bond tier changed: {:?} -> {:?}", before, after);
        Some(after)
    } else {
        None
    }
}

/// Credit coins. Always succeeds.
pub fn add_coins(state: &mut GameState, amount: u64) {
    if amount == 0 {
        return;
    }
    state.progression.coins = state.progression.coins.saturating_add(amount);
    state.statistics.bump(Statistic::TotalCoinsEarned, amount);
}

/// Debit coins. Fails without touching anything if the balance is short.
pub fn spend_coins(state: &mut GameState, amount: u64) -> bool {
    if state.progression.coins < amount {
        log::debug!(
            "Spend rejected: {} coins requested, {} available",
            amount,
            state.progression.coins
        );
        return false;
    }
    state.progression.coins -= amount;
    state.statistics.bump(Statistic::TotalCoinsSpent, amount);
    advance_tasks(
        state,
        TaskEvent::Spend,
        u32::try_from(amount).unwrap_or(u32::MAX),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::onboarded;
    use petpal_logic::constants::limits;
    use petpal_logic::progression::total_xp_for_level;
    use proptest::prelude::*;

    #[test]
    fn test_add_xp_level_up_pays_bonus_once() {
        let mut s = onboarded();
        s.progression.xp = 90;
        let coins = s.progression.coins;

        let out = add_xp(&mut s, 20);
        assert!(out.leveled_up());
        assert_eq!(s.progression.level, 2);
        assert_eq!(s.progression.xp, 10);
        assert_eq!(s.progression.coins, coins + 50);
        assert_eq!(s.statistics.total_coins_earned, 50);
    }

    #[test]
    fn test_multi_level_grant_single_bonus() {
        let mut s = onboarded();
        let coins = s.progression.coins;
        let out = add_xp(&mut s, 460);
        assert_eq!(out.levels_gained, 3);
        assert_eq!((s.progression.level, s.progression.xp), (4, 10));
        assert_eq!(s.progression.coins, coins + 50);
    }

    #[test]
    fn test_no_bonus_without_level() {
        let mut s = onboarded();
        let coins = s.progression.coins;
        assert!(!add_xp(&mut s, 50).leveled_up());
        assert_eq!(s.progression.coins, coins);
    }

    #[test]
    fn test_bond_cap_and_tier() {
        let mut s = onboarded();
        s.progression.bond = 20;
        s.progression.bond_tier = BondTier::from_bond(20);

        assert_eq!(add_bond(&mut s, 1), Some(BondTier::Acquaintance));
        assert_eq!(add_bond(&mut s, 1), None);

        add_bond(&mut s, 500);
        assert_eq!(s.progression.bond, limits::MAX_BOND);
        assert_eq!(s.progression.bond_tier, BondTier::Soulmate);
    }

    #[test]
    fn test_spend_rejected_when_short() {
        let mut s = onboarded();
        s.progression.coins = 10;
        let before = s.clone();
        assert!(!spend_coins(&mut s, 11));
        assert_eq!(s, before);

        assert!(spend_coins(&mut s, 10));
        assert_eq!(s.progression.coins, 0);
        assert_eq!(s.statistics.total_coins_spent, 10);
    }

    proptest! {
        #[test]
        fn prop_level_and_tier_follow_sources(grants in proptest::collection::vec((0u64..600, 0u32..30), 1..20)) {
            let mut s = onboarded();
            let mut total_xp = 0u64;
            for (xp, bond) in grants {
                add_xp(&mut s, xp);
                add_bond(&mut s, bond);
                total_xp += xp;
            }
            let p = s.progression;
            prop_assert!(p.is_consistent());
            prop_assert!(p.bond <= limits::MAX_BOND);
            prop_assert_eq!(total_xp_for_level(p.level) + p.xp, total_xp);
        }
    }
}
