//! Onboarding, full reset, pet age and settings.

use petpal_logic::breeds::breed_by_id;
use petpal_logic::constants::{initial, time};
use petpal_logic::progression::AgeStage;
use petpal_logic::stats::StatVector;
use rand::Rng;

use crate::clock::GameTime;
use crate::components::{GameState, PetProfile, Settings, Streak};
use crate::systems::check_and_reset_tasks;

/// Adopt a pet. Rejects unknown breeds and a game that already has one.
///
/// Rolls the first daily and weekly tasks and counts today as day one of
/// the login streak.
pub fn onboard(
    state: &mut GameState,
    breed_id: &str,
    name: &str,
    now: GameTime,
    daily_task_count: usize,
    rng: &mut impl Rng,
) -> bool {
    if state.is_onboarded() {
        log::debug!("Onboarding rejected: pet already adopted");
        return false;
    }
    let Some(breed) = breed_by_id(breed_id) else {
        log::debug!("Onboarding rejected: unknown breed {}", breed_id);
        return false;
    };

    state.pet = Some(PetProfile {
        breed_id: breed.id.to_string(),
        name: name.to_string(),
        created_at: now.millis,
    });
    state.stats = StatVector::splat(initial::STAT);
    state.last_update = now.millis;
    state.last_daily_reset = None;
    state.last_weekly_reset = None;
    check_and_reset_tasks(state, now, daily_task_count, rng);
    state.streak = Streak {
        current: 1,
        longest: 1,
        last_login_date: Some(now.date),
        today_collected: false,
    };
    state.statistics.days_played = 1;
    state.age_stage = AgeStage::Puppy;

    log::info!("Adopted {} ({}) on {}", name, breed.id, now.date);
    true
}

/// Back to a fresh, un-onboarded game.
pub fn reset_game(state: &mut GameState) {
    *state = GameState::default();
    log::info!("Game reset");
}

/// Recompute the age stage. Returns the new stage when it changed.
pub fn check_pet_age(state: &mut GameState, now_ms: i64) -> Option<AgeStage> {
    let created_at = state.pet.as_ref()?.created_at;
    let days = (now_ms - created_at).max(0) / time::MS_PER_DAY;
    let stage = AgeStage::from_age_days(days);
    if stage == state.age_stage {
        return None;
    }
    log::info!("Pet is now {:?} ({} days)", stage, days);
    state.age_stage = stage;
    Some(stage)
}

pub fn update_settings(state: &mut GameState, settings: Settings) {
    state.settings = settings.sanitized();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, onboarded, rng};
    use petpal_logic::progression::BondTier;

    #[test]
    fn test_onboard_fresh_game() {
        let mut s = GameState::default();
        let now = at(2024, 6, 3, 9);
        assert!(onboard(&mut s, "dog_03", "Karamel", now, 3, &mut rng()));

        let pet = s.pet.as_ref().unwrap();
        assert_eq!(pet.name, "Karamel");
        assert_eq!(pet.created_at, now.millis);
        assert_eq!(s.stats, StatVector::splat(80));
        assert_eq!(s.last_update, now.millis);
        assert_eq!(s.daily_tasks.len(), 3);
        assert!(s.weekly_task.is_some());
        assert_eq!(s.last_daily_reset, Some(now.date));
        assert_eq!((s.streak.current, s.streak.longest), (1, 1));
        assert_eq!(s.streak.last_login_date, Some(now.date));
        assert_eq!(s.statistics.days_played, 1);
        assert_eq!(s.progression.coins, 50);
        assert_eq!(s.progression.bond_tier, BondTier::Stranger);
    }

    #[test]
    fn test_onboard_rejections() {
        let mut s = GameState::default();
        assert!(!onboard(&mut s, "cat_01", "Tekir", at(2024, 6, 3, 9), 3, &mut rng()));
        assert!(!s.is_onboarded());

        let mut s = onboarded();
        let before = s.clone();
        assert!(!onboard(&mut s, "dog_01", "Again", at(2024, 6, 3, 9), 3, &mut rng()));
        assert_eq!(s, before);
    }

    #[test]
    fn test_reset_lowers_everything() {
        let mut s = onboarded();
        s.statistics.total_feeds = 40;
        s.progression.coins = 999;
        reset_game(&mut s);
        assert_eq!(s, GameState::default());
    }

    #[test]
    fn test_age_stage_changes_once() {
        let mut s = onboarded();
        let born = s.pet.as_ref().unwrap().created_at;
        assert_eq!(check_pet_age(&mut s, born + 29 * time::MS_PER_DAY), None);
        assert_eq!(
            check_pet_age(&mut s, born + 30 * time::MS_PER_DAY),
            Some(AgeStage::Adult)
        );
        assert_eq!(check_pet_age(&mut s, born + 31 * time::MS_PER_DAY), None);
        assert_eq!(
            check_pet_age(&mut s, born + 90 * time::MS_PER_DAY),
            Some(AgeStage::Senior)
        );
    }

    #[test]
    fn test_settings_clamped() {
        let mut s = onboarded();
        update_settings(
            &mut s,
            Settings {
                music_volume: 3.0,
                ..Settings::default()
            },
        );
        assert_eq!(s.settings.music_volume, 1.0);
    }
}
