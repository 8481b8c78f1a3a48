//! Bond-gated tricks.

use petpal_logic::constants::{cooldowns, rewards};
use petpal_logic::tricks::{available_tricks, TrickId};

use crate::components::{GameState, Statistic};
use crate::systems::{add_bond, add_coins, add_xp};

/// What a trick paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrickReward {
    pub xp: u64,
    pub coins: u64,
}

/// Add every trick the current bond allows. Returns the new ones.
pub fn check_unlock_tricks(state: &mut GameState) -> Vec<TrickId> {
    let mut newly = Vec::new();
    for trick in available_tricks(state.progression.bond) {
        if state.unlocked_tricks.insert(trick.id) {
            log::info!("Trick unlocked: {:?}", trick.id);
            newly.push(trick.id);
        }
    }
    newly
}

pub fn trick_cooldown_ready(state: &GameState, now_ms: i64) -> bool {
    match state.last_trick_performed {
        Some(last) => now_ms - last >= cooldowns::TRICK_MS,
        None => true,
    }
}

/// Perform an unlocked trick. One cooldown is shared by all tricks.
pub fn perform_trick(state: &mut GameState, trick: TrickId, now_ms: i64) -> Option<TrickReward> {
    if state.pet.is_none() {
        return None;
    }
    if !state.unlocked_tricks.contains(&trick) {
        log::debug!("Trick {:?} rejected: locked", trick);
        return None;
    }
    if !trick_cooldown_ready(state, now_ms) {
        log::debug!("Trick {:?} rejected: cooling down", trick);
        return None;
    }

    let def = trick.def();
    add_xp(state, def.xp);
    add_coins(state, def.coins);
    add_bond(state, rewards::TRICK_BOND);
    state.statistics.bump(Statistic::TotalTricksPerformed, 1);
    state.last_trick_performed = Some(now_ms);

    Some(TrickReward {
        xp: def.xp,
        coins: def.coins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::onboarded;

    #[test]
    fn test_unlock_follows_bond() {
        let mut s = onboarded();
        assert!(check_unlock_tricks(&mut s).is_empty());

        s.progression.bond = 45;
        assert_eq!(check_unlock_tricks(&mut s), vec![TrickId::Paw, TrickId::Roll]);
        assert!(check_unlock_tricks(&mut s).is_empty());
        assert_eq!(s.unlocked_tricks.len(), 3);
    }

    #[test]
    fn test_locked_trick_rejected() {
        let mut s = onboarded();
        let before = s.clone();
        assert!(perform_trick(&mut s, TrickId::Spin, 0).is_none());
        assert_eq!(s, before);
    }

    #[test]
    fn test_shared_cooldown() {
        let mut s = onboarded();
        s.unlocked_tricks.insert(TrickId::Paw);
        let coins = s.progression.coins;

        let r = perform_trick(&mut s, TrickId::Sit, 1_000).unwrap();
        assert_eq!(r, TrickReward { xp: 5, coins: 2 });
        assert_eq!(s.progression.coins, coins + 2);
        assert_eq!(s.progression.bond, 1);
        assert_eq!(s.statistics.total_tricks_performed, 1);

        assert!(perform_trick(&mut s, TrickId::Paw, 30_999).is_none());
        assert!(perform_trick(&mut s, TrickId::Paw, 31_000).is_some());
        assert_eq!(s.last_trick_performed, Some(31_000));
    }
}
