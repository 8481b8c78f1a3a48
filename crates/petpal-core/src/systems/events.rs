//! Random event roller
//!
//! One cooldown clock is shared by every trigger. Within a roll, eligible
//! events are tried in table order and the first independent chance that
//! hits wins.

use petpal_logic::constants::cooldowns;
use petpal_logic::events::{eligible_events, event_by_id, EventReward, EventTrigger, RandomEventDef};
use petpal_logic::stats::Stat;
use rand::Rng;

use crate::components::{GameState, Statistic};
use crate::systems::{add_coins, add_xp, grant_item};

/// Whether the shared event cooldown has passed at `now_ms`.
pub fn event_cooldown_ready(state: &GameState, now_ms: i64) -> bool {
    match state.last_random_event {
        Some(last) => now_ms - last >= cooldowns::RANDOM_EVENT_MS,
        None => true,
    }
}

/// Roll for an event. Stamps the cooldown only when one fires.
///
/// The reward is not applied here.
pub fn try_trigger_event(
    state: &mut GameState,
    trigger: EventTrigger,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Option<&'static RandomEventDef> {
    if !event_cooldown_ready(state, now_ms) {
        return None;
    }

    let event = eligible_events(trigger, state.progression.bond)
        .find(|e| rng.gen::<f64>() < e.chance)?;

    state.last_random_event = Some(now_ms);
    log::debug!("Random event {} fired on {:?}", event.id, trigger);
    Some(event)
}

/// Apply coins, XP, happiness and item of an event reward.
pub fn apply_event_reward(state: &mut GameState, reward: &EventReward) {
    add_coins(state, reward.coins);
    add_xp(state, reward.xp);
    if reward.happiness != 0 {
        state.stats.adjust(Stat::Happiness, reward.happiness);
    }
    if let Some(item) = reward.item {
        grant_item(state, item);
    }
}

/// The player saw an event. Unknown ids are ignored.
pub fn record_event_witnessed(state: &mut GameState, event_id: &str) -> bool {
    let Some(event) = event_by_id(event_id) else {
        log::debug!("Ignoring unknown event {}", event_id);
        return false;
    };
    state.seen_events.push(event.id.to_string());
    state.statistics.bump(Statistic::RandomEventsWitnessed, 1);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{onboarded, rng};
    use petpal_logic::constants::time::MS_PER_MINUTE;
    use rand::rngs::mock::StepRng;

    /// Every `gen::<f64>()` from this RNG is 0.0, so the first eligible
    /// event always hits.
    fn always_hit() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_first_eligible_in_table_order_wins() {
        let mut s = onboarded();
        let e = try_trigger_event(&mut s, EventTrigger::Login, 0, &mut always_hit()).unwrap();
        assert_eq!(e.id, "event_butterfly");
        assert_eq!(s.last_random_event, Some(0));
    }

    #[test]
    fn test_bond_gate_respected() {
        let mut s = onboarded();
        s.progression.bond = 0;
        let e = try_trigger_event(&mut s, EventTrigger::Idle, 0, &mut always_hit()).unwrap();
        assert_eq!(e.id, "event_nap");
        let mut r = rng();
        for _ in 0..200 {
            s.last_random_event = None;
            if let Some(e) = try_trigger_event(&mut s, EventTrigger::Action, 0, &mut r) {
                assert_eq!(e.min_bond, 0);
            }
        }
    }

    #[test]
    fn test_cooldown_shared_across_triggers() {
        let mut s = onboarded();
        let mut hit = always_hit();
        assert!(try_trigger_event(&mut s, EventTrigger::Login, 0, &mut hit).is_some());
        assert!(try_trigger_event(&mut s, EventTrigger::Action, 4 * MS_PER_MINUTE, &mut hit).is_none());
        assert!(try_trigger_event(&mut s, EventTrigger::Idle, 5 * MS_PER_MINUTE - 1, &mut hit).is_none());
        assert!(try_trigger_event(&mut s, EventTrigger::Idle, 5 * MS_PER_MINUTE, &mut hit).is_some());
    }

    #[test]
    fn test_miss_does_not_stamp() {
        let mut s = onboarded();
        // u64::MAX maps to a float just below 1.0, above every chance.
        let mut miss = StepRng::new(u64::MAX, 0);
        assert!(try_trigger_event(&mut s, EventTrigger::Login, 0, &mut miss).is_none());
        assert_eq!(s.last_random_event, None);
    }

    #[test]
    fn test_witness_and_reward() {
        let mut s = onboarded();
        assert!(record_event_witnessed(&mut s, "event_gift"));
        assert!(!record_event_witnessed(&mut s, "event_unknown"));
        assert_eq!(s.statistics.random_events_witnessed, 1);
        assert_eq!(s.seen_events, vec!["event_gift".to_string()]);

        let coins = s.progression.coins;
        s.stats.happiness = 50;
        apply_event_reward(&mut s, &event_by_id("event_sunshine").unwrap().reward);
        apply_event_reward(&mut s, &event_by_id("event_gift").unwrap().reward);
        assert_eq!(s.stats.happiness, 60);
        assert_eq!(s.progression.coins, coins + 15);
    }
}
