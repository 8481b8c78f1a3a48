//! Direct care actions and their fixed effect table.

use serde::{Deserialize, Serialize};

use crate::breeds::Breed;
use crate::stats::{Stat, StatDelta};

/// A care action the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Feed,
    Water,
    Play,
    Walk,
    Bath,
    Sleep,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Feed,
        ActionKind::Water,
        ActionKind::Play,
        ActionKind::Walk,
        ActionKind::Bath,
        ActionKind::Sleep,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Water => "water",
            ActionKind::Play => "play",
            ActionKind::Walk => "walk",
            ActionKind::Bath => "bath",
            ActionKind::Sleep => "sleep",
        }
    }

    /// The static effect of this action.
    pub fn effect(self) -> ActionEffect {
        match self {
            ActionKind::Feed => ActionEffect {
                stats: StatDelta {
                    hunger: 40,
                    energy: 5,
                    ..StatDelta::ZERO
                },
                coins: 3,
                xp: 5,
                bond: 1,
            },
            ActionKind::Water => ActionEffect {
                stats: StatDelta {
                    thirst: 50,
                    energy: 5,
                    ..StatDelta::ZERO
                },
                coins: 3,
                xp: 5,
                bond: 1,
            },
            ActionKind::Play => ActionEffect {
                stats: StatDelta {
                    happiness: 30,
                    energy: -15,
                    hunger: -5,
                    ..StatDelta::ZERO
                },
                coins: 5,
                xp: 10,
                bond: 2,
            },
            ActionKind::Walk => ActionEffect {
                stats: StatDelta {
                    happiness: 20,
                    energy: -10,
                    hygiene: -10,
                    ..StatDelta::ZERO
                },
                coins: 5,
                xp: 10,
                bond: 2,
            },
            ActionKind::Bath => ActionEffect {
                stats: StatDelta {
                    hygiene: 60,
                    happiness: 10,
                    ..StatDelta::ZERO
                },
                coins: 3,
                xp: 5,
                bond: 1,
            },
            ActionKind::Sleep => ActionEffect {
                stats: StatDelta {
                    energy: 40,
                    ..StatDelta::ZERO
                },
                coins: 3,
                xp: 5,
                bond: 1,
            },
        }
    }
}

/// Stat deltas plus coin, xp and bond rewards of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEffect {
    pub stats: StatDelta,
    pub coins: u64,
    pub xp: u64,
    pub bond: u32,
}

/// Stat deltas an action applies for a given breed.
///
/// Only `play`'s happiness is breed-scaled (rounded); everything else is the
/// table value.
pub fn effective_stat_delta(action: ActionKind, breed: &Breed) -> StatDelta {
    let mut delta = action.effect().stats;
    if action == ActionKind::Play {
        let base = delta.get(Stat::Happiness);
        let scaled = (f64::from(base) * breed.play_bonus).round() as i32;
        delta.set(Stat::Happiness, scaled);
    }
    delta
}
