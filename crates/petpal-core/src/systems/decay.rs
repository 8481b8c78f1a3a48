//! Time & decay resolver - turns elapsed wall-clock time into stat loss

use petpal_logic::breeds::breed_or_neutral;
use petpal_logic::constants::{decay_rates, time};
use petpal_logic::events::{EventTrigger, RandomEventDef};
use petpal_logic::stats::Stat;
use rand::Rng;

use crate::components::GameState;
use crate::systems::try_trigger_event;

fn base_rate(stat: Stat) -> f64 {
    match stat {
        Stat::Hunger => decay_rates::HUNGER,
        Stat::Thirst => decay_rates::THIRST,
        Stat::Happiness => decay_rates::HAPPINESS,
        Stat::Energy => decay_rates::ENERGY,
        Stat::Hygiene => decay_rates::HYGIENE,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecayOutcome {
    /// Raw elapsed hours since the last update.
    pub elapsed_hours: f64,
    /// Hours actually decayed (capped).
    pub decayed_hours: f64,
    /// Clock moved backwards past tolerance; nothing decayed.
    pub clock_anomaly: bool,
    /// Login event rolled after a long enough absence.
    pub login_event: Option<&'static RandomEventDef>,
}

/// Decay stats for the time since `last_update`, then stamp `last_update`.
///
/// Offline time counts for at most a day. After an hour or more away a
/// login event is rolled; its happiness reward is folded into the stats
/// here, the rest is left to the caller. No-op before onboarding.
pub fn apply_elapsed_decay(
    state: &mut GameState,
    now_ms: i64,
    rng: &mut impl Rng,
) -> DecayOutcome {
    let Some(pet) = &state.pet else {
        return DecayOutcome::default();
    };

    let elapsed = now_ms - state.last_update;
    if elapsed < -time::CLOCK_SKEW_TOLERANCE_MS {
        log::warn!("Clock moved back {} ms; skipping decay", -elapsed);
        state.last_update = now_ms;
        return DecayOutcome {
            elapsed_hours: elapsed as f64 / time::MS_PER_HOUR as f64,
            clock_anomaly: true,
            ..DecayOutcome::default()
        };
    }

    let hours = elapsed as f64 / time::MS_PER_HOUR as f64;
    let capped = hours.clamp(0.0, time::MAX_OFFLINE_DECAY_HOURS);
    let breed = breed_or_neutral(&pet.breed_id);

    let mut stats = state.stats;
    for stat in Stat::ALL {
        let loss = base_rate(stat) * capped * breed.decay_multiplier(stat);
        stats.set(stat, f64::from(stats.get(stat)) - loss);
    }

    let mut login_event = None;
    if hours >= time::LOGIN_EVENT_MIN_HOURS {
        login_event = try_trigger_event(state, EventTrigger::Login, now_ms, rng);
        if let Some(event) = login_event {
            if event.reward.happiness != 0 {
                stats.adjust(Stat::Happiness, event.reward.happiness);
            }
        }
    }

    state.stats = stats;
    state.last_update = now_ms;

    DecayOutcome {
        elapsed_hours: hours,
        decayed_hours: capped,
        clock_anomaly: false,
        login_event,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{onboarded, rng};
    use petpal_logic::constants::time::{MS_PER_DAY, MS_PER_HOUR};
    use petpal_logic::stats::StatVector;
    use proptest::prelude::*;

    fn fresh() -> GameState {
        let mut s = onboarded();
        s.pet.as_mut().unwrap().breed_id = "dog_02".into();
        s.last_update = 0;
        s.stats = StatVector::splat(100);
        // Keep login events out of stat comparisons.
        s.last_random_event = Some(i64::MAX / 2);
        s
    }

    #[test]
    fn test_one_hour_decay() {
        let mut s = fresh();
        apply_elapsed_decay(&mut s, MS_PER_HOUR, &mut rng());
        // dog_02: energy 0.9, happiness 1.0, hunger 1.0
        assert_eq!(s.stats.hunger, 92);
        assert_eq!(s.stats.thirst, 90);
        assert_eq!(s.stats.happiness, 95);
        assert_eq!(s.stats.energy, 96);
        assert_eq!(s.stats.hygiene, 97);
        assert_eq!(s.last_update, MS_PER_HOUR);
    }

    #[test]
    fn test_ten_days_equals_one_day() {
        let mut a = fresh();
        let mut b = fresh();
        apply_elapsed_decay(&mut a, MS_PER_DAY, &mut rng());
        apply_elapsed_decay(&mut b, 10 * MS_PER_DAY, &mut rng());
        assert_eq!(a.stats, b.stats);
        assert_eq!(a.stats.thirst, 0);
    }

    #[test]
    fn test_clock_anomaly_only_stamps() {
        let mut s = fresh();
        s.last_update = 10 * MS_PER_HOUR;
        let before = s.stats;
        let now = s.last_update - 61_000;
        let out = apply_elapsed_decay(&mut s, now, &mut rng());
        assert!(out.clock_anomaly);
        assert_eq!(s.stats, before);
        assert_eq!(s.last_update, now);
    }

    #[test]
    fn test_small_backwards_skew_tolerated() {
        let mut s = fresh();
        s.last_update = MS_PER_HOUR;
        let out = apply_elapsed_decay(&mut s, MS_PER_HOUR - 30_000, &mut rng());
        assert!(!out.clock_anomaly);
        assert_eq!(s.stats, StatVector::splat(100));
    }

    #[test]
    fn test_second_call_same_instant_is_noop() {
        let mut s = fresh();
        apply_elapsed_decay(&mut s, 5 * MS_PER_HOUR, &mut rng());
        let after_first = s.stats;
        apply_elapsed_decay(&mut s, 5 * MS_PER_HOUR, &mut rng());
        assert_eq!(s.stats, after_first);
    }

    #[test]
    fn test_no_pet_no_change() {
        let mut s = GameState::default();
        let before = s.clone();
        apply_elapsed_decay(&mut s, MS_PER_DAY, &mut rng());
        assert_eq!(s, before);
    }

    proptest! {
        #[test]
        fn prop_decay_never_raises_or_escapes_range(
            start in 0u8..=100,
            elapsed in -MS_PER_HOUR..(40 * MS_PER_DAY),
        ) {
            let mut s = fresh();
            s.stats = StatVector::splat(start);
            s.last_update = MS_PER_HOUR;
            apply_elapsed_decay(&mut s, MS_PER_HOUR + elapsed, &mut rng());
            for stat in Stat::ALL {
                prop_assert!(s.stats.get(stat) <= start);
                prop_assert!(s.stats.get(stat) <= 100);
            }
            prop_assert_eq!(s.last_update, MS_PER_HOUR + elapsed);
        }
    }
}
