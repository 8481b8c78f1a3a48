//! Mini-game settlement: score to reward.
//!
//! A mini-game is played on top of a base care action. The base action pays
//! its normal coins/XP/bond and stat effect first; the settlement computed
//! here is a *differential* that is applied afterwards, so the net stat change
//! is `base effect + settlement`. Differentials are computed against the
//! unscaled action table, which is what [`net_stat_delta`] checks.

use crate::actions::ActionKind;
use crate::stats::{Stat, StatDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MiniGameKind {
    BallCatch,
    BubblePop,
    BoneSearch,
    PortionSelect,
    DreamCatch,
}

pub mod bonus {
    pub const BALL_CATCH_PER_CATCH: i32 = 10;
    pub const BALL_CATCH_MAX: u32 = 5;
    pub const BALL_CATCH_COINS: u64 = 5;

    pub const BUBBLE_POP_COINS: u64 = 5;

    pub const BONE_SEARCH_PER_BONE: i32 = 5;
    pub const BONE_SEARCH_COINS_PER_BONE: u64 = 3;
    pub const BONE_SEARCH_TOTAL: u32 = 5;

    /// (hunger, happiness) for portions 1, 2 and 3.
    pub const PORTIONS: [(i32, i32); 3] = [(20, 0), (40, 0), (60, 5)];

    pub const DREAM_CATCH_PER_CATCH: i32 = 5;
    pub const DREAM_CATCH_MAX: u32 = 10;
    pub const DREAM_CATCH_COINS: u64 = 5;
}

impl MiniGameKind {
    pub const ALL: [MiniGameKind; 5] = [
        MiniGameKind::BallCatch,
        MiniGameKind::BubblePop,
        MiniGameKind::BoneSearch,
        MiniGameKind::PortionSelect,
        MiniGameKind::DreamCatch,
    ];

    /// Care action the game is played on top of.
    pub fn base_action(self) -> ActionKind {
        match self {
            MiniGameKind::BallCatch => ActionKind::Play,
            MiniGameKind::BubblePop => ActionKind::Bath,
            MiniGameKind::BoneSearch => ActionKind::Walk,
            MiniGameKind::PortionSelect => ActionKind::Feed,
            MiniGameKind::DreamCatch => ActionKind::Sleep,
        }
    }

    pub fn for_action(action: ActionKind) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.base_action() == action)
    }
}

/// What `complete_mini_game` applies after the base action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settlement {
    pub bonus_coins: u64,
    pub stats: StatDelta,
}

fn base(action: ActionKind, stat: Stat) -> i32 {
    action.effect().stats.get(stat)
}

/// Convert a finished game's score into a settlement.
///
/// For portion select, `score` is the chosen portion (1..=3) and `max_score`
/// is ignored. Scores above `max_score` are treated as `max_score`.
pub fn settle(kind: MiniGameKind, score: u32, max_score: u32) -> Settlement {
    let max_score = max_score.max(1);
    let clamped = score.min(max_score);
    match kind {
        MiniGameKind::BallCatch => {
            let gain = clamped as i32 * bonus::BALL_CATCH_PER_CATCH;
            Settlement {
                bonus_coins: if clamped == max_score { bonus::BALL_CATCH_COINS } else { 0 },
                stats: StatDelta::single(
                    Stat::Happiness,
                    gain - base(ActionKind::Play, Stat::Happiness),
                ),
            }
        }
        MiniGameKind::BubblePop => {
            let full = base(ActionKind::Bath, Stat::Hygiene);
            let gain = (f64::from(clamped) / f64::from(max_score) * f64::from(full)).round() as i32;
            Settlement {
                bonus_coins: if clamped == max_score { bonus::BUBBLE_POP_COINS } else { 0 },
                stats: StatDelta::single(Stat::Hygiene, gain - full),
            }
        }
        MiniGameKind::BoneSearch => Settlement {
            bonus_coins: u64::from(clamped) * bonus::BONE_SEARCH_COINS_PER_BONE,
            stats: StatDelta::single(Stat::Happiness, clamped as i32 * bonus::BONE_SEARCH_PER_BONE),
        },
        MiniGameKind::PortionSelect => {
            let idx = (score.clamp(1, 3) - 1) as usize;
            let (hunger, happiness) = bonus::PORTIONS[idx];
            let mut stats = StatDelta::single(Stat::Hunger, hunger - base(ActionKind::Feed, Stat::Hunger));
            stats.set(Stat::Happiness, happiness);
            Settlement {
                bonus_coins: 0,
                stats,
            }
        }
        MiniGameKind::DreamCatch => {
            let gain = clamped as i32 * bonus::DREAM_CATCH_PER_CATCH;
            Settlement {
                bonus_coins: if clamped >= max_score { bonus::DREAM_CATCH_COINS } else { 0 },
                stats: StatDelta::single(Stat::Energy, gain - base(ActionKind::Sleep, Stat::Energy)),
            }
        }
    }
}

/// Base action delta plus settlement delta, before clamping.
pub fn net_stat_delta(kind: MiniGameKind, settlement: &Settlement) -> StatDelta {
    let base = kind.base_action().effect().stats;
    let mut net = StatDelta::ZERO;
    for stat in Stat::ALL {
        net.set(stat, base.get(stat) + settlement.stats.get(stat));
    }
    net
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ball_catch() {
        let perfect = settle(MiniGameKind::BallCatch, 5, 5);
        assert_eq!(perfect.bonus_coins, 5);
        assert_eq!(perfect.stats.get(Stat::Happiness), 20);

        let miss = settle(MiniGameKind::BallCatch, 0, 5);
        assert_eq!(miss.bonus_coins, 0);
        assert_eq!(miss.stats.get(Stat::Happiness), -30);
    }

    #[test]
    fn test_bubble_pop_partial() {
        let s = settle(MiniGameKind::BubblePop, 7, 10);
        // round(0.7 * 60) = 42
        assert_eq!(s.stats.get(Stat::Hygiene), 42 - 60);
        assert_eq!(s.bonus_coins, 0);
        assert_eq!(settle(MiniGameKind::BubblePop, 10, 10).stats.get(Stat::Hygiene), 0);
    }

    #[test]
    fn test_bone_search_is_additive() {
        let s = settle(MiniGameKind::BoneSearch, 4, 5);
        assert_eq!(s.bonus_coins, 12);
        assert_eq!(s.stats.get(Stat::Happiness), 20);
    }

    #[test]
    fn test_portions() {
        let small = settle(MiniGameKind::PortionSelect, 1, 3);
        assert_eq!(small.stats.get(Stat::Hunger), -20);
        let large = settle(MiniGameKind::PortionSelect, 3, 3);
        assert_eq!(large.stats.get(Stat::Hunger), 20);
        assert_eq!(large.stats.get(Stat::Happiness), 5);
    }

    #[test]
    fn test_dream_catch_full() {
        let s = settle(MiniGameKind::DreamCatch, 10, 10);
        assert_eq!(s.stats.get(Stat::Energy), 10);
        assert_eq!(s.bonus_coins, 5);
    }

    #[test]
    fn test_base_actions_round_trip() {
        for kind in MiniGameKind::ALL {
            assert_eq!(MiniGameKind::for_action(kind.base_action()), Some(kind));
        }
        assert_eq!(MiniGameKind::for_action(ActionKind::Water), None);
    }

    proptest! {
        /// The net effect must equal what each game advertises, whatever the
        /// base action table says.
        #[test]
        fn prop_net_effect_matches_game_rules(score in 0u32..=10) {
            let ball = settle(MiniGameKind::BallCatch, score, bonus::BALL_CATCH_MAX);
            let net = net_stat_delta(MiniGameKind::BallCatch, &ball);
            prop_assert_eq!(
                net.get(Stat::Happiness),
                score.min(bonus::BALL_CATCH_MAX) as i32 * bonus::BALL_CATCH_PER_CATCH
            );
            prop_assert_eq!(net.get(Stat::Energy), ActionKind::Play.effect().stats.get(Stat::Energy));

            let dream = settle(MiniGameKind::DreamCatch, score, bonus::DREAM_CATCH_MAX);
            let net = net_stat_delta(MiniGameKind::DreamCatch, &dream);
            prop_assert_eq!(net.get(Stat::Energy), score as i32 * bonus::DREAM_CATCH_PER_CATCH);

            let bubble = settle(MiniGameKind::BubblePop, score, 10);
            let net = net_stat_delta(MiniGameKind::BubblePop, &bubble);
            prop_assert_eq!(net.get(Stat::Hygiene), (f64::from(score) / 10.0 * 60.0).round() as i32);

            let bone = settle(MiniGameKind::BoneSearch, score, bonus::BONE_SEARCH_TOTAL);
            let net = net_stat_delta(MiniGameKind::BoneSearch, &bone);
            let walk = ActionKind::Walk.effect().stats.get(Stat::Happiness);
            prop_assert_eq!(
                net.get(Stat::Happiness),
                walk + score.min(bonus::BONE_SEARCH_TOTAL) as i32 * bonus::BONE_SEARCH_PER_BONE
            );
        }

        #[test]
        fn prop_portion_net_hunger(portion in 1u32..=3) {
            let s = settle(MiniGameKind::PortionSelect, portion, 3);
            let net = net_stat_delta(MiniGameKind::PortionSelect, &s);
            prop_assert_eq!(net.get(Stat::Hunger), bonus::PORTIONS[(portion - 1) as usize].0);
        }
    }
}
