//! Pet mood derived from the stat vector.

use serde::{Deserialize, Serialize};

use crate::constants::limits::{STAT_CRITICAL_THRESHOLD, STAT_WARNING_THRESHOLD};
use crate::stats::StatVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetMood {
    Happy,
    Neutral,
    Sad,
    Hungry,
    Thirsty,
    Tired,
    Dirty,
}

const HAPPY_ABOVE: u8 = 70;

impl PetMood {
    /// Critical needs win over warnings, warnings over happiness.
    pub fn from_stats(stats: &StatVector) -> Self {
        let critical = |v: u8| v < STAT_CRITICAL_THRESHOLD;
        if critical(stats.hunger) {
            return PetMood::Hungry;
        }
        if critical(stats.thirst) {
            return PetMood::Thirsty;
        }
        if critical(stats.energy) {
            return PetMood::Tired;
        }
        if critical(stats.hygiene) {
            return PetMood::Dirty;
        }
        if critical(stats.happiness) {
            return PetMood::Sad;
        }

        if stats.hunger < STAT_WARNING_THRESHOLD {
            return PetMood::Hungry;
        }
        if stats.thirst < STAT_WARNING_THRESHOLD {
            return PetMood::Thirsty;
        }

        if stats.happiness > HAPPY_ABOVE {
            PetMood::Happy
        } else {
            PetMood::Neutral
        }
    }
}
