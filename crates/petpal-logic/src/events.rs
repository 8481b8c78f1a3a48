//! Random flavor events: when they can fire and what they give.
//!
//! Rolling is done by the engine with an injected RNG; this table only
//! fixes order, chances and bond gates. Order matters: the roller returns
//! the first eligible event whose independent chance hits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTrigger {
    Login,
    Action,
    Idle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventReward {
    pub coins: u64,
    pub xp: u64,
    pub happiness: i32,
    pub item: Option<&'static str>,
}

impl EventReward {
    pub const NONE: EventReward = EventReward {
        coins: 0,
        xp: 0,
        happiness: 0,
        item: None,
    };

    /// The same reward with the happiness part removed.
    pub fn without_happiness(self) -> Self {
        Self {
            happiness: 0,
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomEventDef {
    pub id: &'static str,
    /// Independent probability in `[0, 1]`.
    pub chance: f64,
    pub trigger: EventTrigger,
    pub min_bond: u32,
    pub message_key: &'static str,
    pub reward: EventReward,
    pub animation: Option<&'static str>,
}

const fn event(
    id: &'static str,
    chance: f64,
    trigger: EventTrigger,
    min_bond: u32,
    message_key: &'static str,
    animation: Option<&'static str>,
) -> RandomEventDef {
    RandomEventDef {
        id,
        chance,
        trigger,
        min_bond,
        message_key,
        reward: EventReward::NONE,
        animation,
    }
}

const fn happy(mut e: RandomEventDef, amount: i32) -> RandomEventDef {
    e.reward.happiness = amount;
    e
}

const fn coins(mut e: RandomEventDef, amount: u64) -> RandomEventDef {
    e.reward.coins = amount;
    e
}

use EventTrigger::{Action, Idle, Login};

pub const RANDOM_EVENTS: [RandomEventDef; 18] = [
    // Login
    happy(event("event_butterfly", 0.1, Login, 0, "event.butterfly", Some("butterfly")), 5),
    happy(event("event_bird", 0.1, Login, 0, "event.bird", Some("bird")), 5),
    happy(event("event_sunshine", 0.1, Login, 0, "event.sunshine", Some("sunshine")), 10),
    event("event_rain", 0.1, Login, 0, "event.rain", Some("rain")),
    // Action
    happy(event("event_bonus_food", 0.05, Action, 0, "event.bonusFood", None), 10),
    coins(event("event_golden_bone", 0.05, Action, 20, "event.goldenBone", Some("sparkle")), 20),
    happy(event("event_double_water", 0.05, Action, 0, "event.doubleWater", None), 10),
    happy(event("event_dance", 0.05, Action, 30, "event.dance", Some("dance")), 15),
    // Idle
    event("event_nap", 0.03, Idle, 0, "event.nap", Some("sleep")),
    event("event_tail_chase", 0.03, Idle, 10, "event.tailChase", Some("spin")),
    event("event_sneeze", 0.03, Idle, 0, "event.sneeze", None),
    event("event_yawn", 0.03, Idle, 0, "event.yawn", Some("yawn")),
    event("event_scratch", 0.03, Idle, 0, "event.scratch", None),
    event("event_roll", 0.03, Idle, 20, "event.roll", Some("roll")),
    // High bond
    coins(event("event_gift", 0.03, Login, 60, "event.gift", Some("gift")), 15),
    happy(event("event_heart", 0.05, Action, 60, "event.heart", Some("heart")), 10),
    event("event_sing", 0.03, Idle, 70, "event.sing", Some("sing")),
    coins(event("event_paw", 0.05, Action, 50, "event.paw", Some("paw")), 3),
];

/// Events that may fire for `trigger` at the given bond, in table order.
pub fn eligible_events(trigger: EventTrigger, bond: u32) -> impl Iterator<Item = &'static RandomEventDef> {
    RANDOM_EVENTS
        .iter()
        .filter(move |e| e.trigger == trigger && bond >= e.min_bond)
}

pub fn event_by_id(id: &str) -> Option<&'static RandomEventDef> {
    RANDOM_EVENTS.iter().find(|e| e.id == id)
}
