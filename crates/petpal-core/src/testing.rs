//! Fixtures shared by the unit tests.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clock::GameTime;
use crate::components::{GameState, PetProfile, Streak};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, hour: u32) -> GameTime {
    GameTime::from_naive(day(y, m, d).and_hms_opt(hour, 0, 0).unwrap())
}

pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// An adopted dog_02 with starting progression and no tasks.
pub fn onboarded() -> GameState {
    let born = at(2024, 1, 1, 9);
    GameState {
        pet: Some(PetProfile {
            breed_id: "dog_02".into(),
            name: "Pamuk".into(),
            created_at: born.millis,
        }),
        last_update: born.millis,
        last_daily_reset: Some(born.date),
        streak: Streak {
            current: 1,
            longest: 1,
            last_login_date: Some(born.date),
            today_collected: false,
        },
        ..GameState::default()
    }
}
