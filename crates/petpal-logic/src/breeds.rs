//! Adoptable dog breeds and their decay / play personality.
//!
//! Multipliers scale the base hourly decay of hunger, happiness and energy.
//! Thirst and hygiene decay identically for every breed.

use crate::stats::Stat;

/// Static breed definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breed {
    pub id: &'static str,
    /// Translation keys for presentation; the engine never reads them.
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub energy_decay: f64,
    pub happiness_decay: f64,
    pub hunger_decay: f64,
    /// Scales the happiness gained from `play`.
    pub play_bonus: f64,
    pub trait_id: &'static str,
}

impl Breed {
    /// Decay multiplier for a stat.
    pub fn decay_multiplier(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Hunger => self.hunger_decay,
            Stat::Happiness => self.happiness_decay,
            Stat::Energy => self.energy_decay,
            Stat::Thirst | Stat::Hygiene => 1.0,
        }
    }
}

/// Used when a save references a breed that is no longer in the table.
pub const NEUTRAL_BREED: Breed = Breed {
    id: "neutral",
    name_key: "breed.neutral.name",
    description_key: "breed.neutral.desc",
    energy_decay: 1.0,
    happiness_decay: 1.0,
    hunger_decay: 1.0,
    play_bonus: 1.0,
    trait_id: "balanced",
};

pub const BREEDS: [Breed; 5] = [
    Breed {
        id: "dog_01",
        name_key: "breed.fluffy.name",
        description_key: "breed.fluffy.desc",
        energy_decay: 1.2,
        happiness_decay: 0.8,
        hunger_decay: 1.1,
        play_bonus: 1.3,
        trait_id: "extra_playful",
    },
    Breed {
        id: "dog_02",
        name_key: "breed.caramel.name",
        description_key: "breed.caramel.desc",
        energy_decay: 0.9,
        happiness_decay: 1.0,
        hunger_decay: 1.0,
        play_bonus: 1.0,
        trait_id: "balanced",
    },
    Breed {
        id: "dog_03",
        name_key: "breed.brave.name",
        description_key: "breed.brave.desc",
        energy_decay: 0.8,
        happiness_decay: 1.1,
        hunger_decay: 1.2,
        play_bonus: 1.1,
        trait_id: "big_appetite",
    },
    Breed {
        id: "dog_04",
        name_key: "breed.hazel.name",
        description_key: "breed.hazel.desc",
        energy_decay: 1.1,
        happiness_decay: 0.9,
        hunger_decay: 1.0,
        play_bonus: 1.2,
        trait_id: "explorer",
    },
    Breed {
        id: "dog_05",
        name_key: "breed.pudgy.name",
        description_key: "breed.pudgy.desc",
        energy_decay: 0.7,
        happiness_decay: 1.2,
        hunger_decay: 0.9,
        play_bonus: 0.9,
        trait_id: "sleepy",
    },
];

pub fn breed_by_id(id: &str) -> Option<&'static Breed> {
    BREEDS.iter().find(|b| b.id == id)
}

/// Look up a breed, falling back to neutral multipliers.
pub fn breed_or_neutral(id: &str) -> &'static Breed {
    breed_by_id(id).unwrap_or(&NEUTRAL_BREED)
}
