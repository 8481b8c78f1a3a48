//! Pet engine - single-writer handle over the game state

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use petpal_logic::achievements::AchievementId;
use petpal_logic::actions::ActionKind;
use petpal_logic::events::{EventTrigger, RandomEventDef};
use petpal_logic::gifts::{DailyGift, StreakReward};
use petpal_logic::items::ItemCategory;
use petpal_logic::minigames::{settle, MiniGameKind, Settlement};
use petpal_logic::mood::PetMood;
use petpal_logic::progression::AgeStage;
use petpal_logic::seasonal::{current_seasonal_event, SeasonalEvent};
use petpal_logic::tricks::TrickId;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clock::{Clock, GameTime};
use crate::components::{GameState, Settings, TaskReward};
use crate::config::EngineConfig;
use crate::persistence::{self, SaveError};
use crate::systems::*;

/// Everything one `tick` changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub decay: DecayOutcome,
    pub tasks_reset: TaskResets,
    /// First check of a new calendar day.
    pub new_login_day: bool,
    pub age_stage: Option<AgeStage>,
    pub new_tricks: Vec<TrickId>,
    pub new_achievements: Vec<AchievementId>,
}

impl TickReport {
    pub fn login_event(&self) -> Option<&'static RandomEventDef> {
        self.decay.login_event
    }
}

/// Result of an accepted care action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionReport {
    /// Decay settled up to the action's instant.
    pub decay: DecayOutcome,
    pub reward: ActionReward,
    pub new_tricks: Vec<TrickId>,
    pub new_achievements: Vec<AchievementId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiniGameReport {
    pub action: ActionReport,
    pub settlement: Settlement,
}

/// Result of a performed trick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrickReport {
    pub reward: TrickReward,
    pub new_tricks: Vec<TrickId>,
    pub new_achievements: Vec<AchievementId>,
}

/// Main game engine
///
/// Owns the aggregate, the clock, the RNG and the per-action throttle. Every
/// operation reads the clock once and passes that instant down.
pub struct PetEngine<C: Clock> {
    state: GameState,
    clock: C,
    rng: ChaCha8Rng,
    config: EngineConfig,
    /// Last accepted use per action kind. Not persisted.
    last_action_at: HashMap<ActionKind, i64>,
}

impl<C: Clock> PetEngine<C> {
    /// A fresh, un-onboarded game
    pub fn new(config: EngineConfig, clock: C) -> Self {
        Self::with_state(config, clock, GameState::default())
    }

    /// Resume from an existing state
    pub fn with_state(config: EngineConfig, clock: C, state: GameState) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            state,
            clock,
            rng,
            config,
            last_action_at: HashMap::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn now(&self) -> GameTime {
        self.clock.now()
    }

    /// Current mood, `None` before onboarding.
    pub fn mood(&self) -> Option<PetMood> {
        self.state
            .pet
            .as_ref()
            .map(|_| PetMood::from_stats(&self.state.stats))
    }

    pub fn seasonal_event(&self) -> Option<&'static SeasonalEvent> {
        current_seasonal_event(self.clock.now().date)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn onboard(&mut self, breed_id: &str, name: &str) -> bool {
        let now = self.clock.now();
        onboard(
            &mut self.state,
            breed_id,
            name,
            now,
            self.config.daily_task_count,
            &mut self.rng,
        )
    }

    /// Decay and recheck everything time-driven.
    ///
    /// Meant to run on start-up, on resume and periodically. A second call at
    /// the same instant changes nothing.
    pub fn tick(&mut self) -> TickReport {
        if !self.state.is_onboarded() {
            return TickReport::default();
        }
        let now = self.clock.now();

        let decay = self.settle_decay(now.millis);
        let tasks_reset = check_and_reset_tasks(
            &mut self.state,
            now,
            self.config.daily_task_count,
            &mut self.rng,
        );
        let new_login_day = check_streak(&mut self.state, now.date);
        let age_stage = check_pet_age(&mut self.state, now.millis);
        let new_tricks = check_unlock_tricks(&mut self.state);
        let new_achievements = check_achievements(&mut self.state, now.millis);

        TickReport {
            decay,
            tasks_reset,
            new_login_day,
            age_stage,
            new_tricks,
            new_achievements,
        }
    }

    fn settle_decay(&mut self, now_ms: i64) -> DecayOutcome {
        let decay = apply_elapsed_decay(&mut self.state, now_ms, &mut self.rng);
        if let Some(event) = decay.login_event {
            // Happiness was already folded into the decayed stats.
            apply_event_reward(&mut self.state, &event.reward.without_happiness());
        }
        decay
    }

    pub fn reset(&mut self) {
        reset_game(&mut self.state);
        self.last_action_at.clear();
    }

    pub fn update_settings(&mut self, settings: Settings) {
        update_settings(&mut self.state, settings);
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    fn throttled(&self, action: ActionKind, now_ms: i64) -> bool {
        match self.last_action_at.get(&action) {
            Some(&last) => (0..self.config.action_throttle_ms).contains(&(now_ms - last)),
            None => false,
        }
    }

    fn apply_action(&mut self, action: ActionKind, now_ms: i64) -> Option<ActionReport> {
        if !self.state.is_onboarded() {
            log::debug!("Action {} rejected: no pet", action.name());
            return None;
        }
        // Actions stamp `last_update`, so time since the last tick decays first.
        let decay = self.settle_decay(now_ms);
        let reward = perform_action(&mut self.state, action, now_ms);
        self.last_action_at.insert(action, now_ms);
        Some(ActionReport {
            decay,
            reward,
            new_tricks: check_unlock_tricks(&mut self.state),
            new_achievements: check_achievements(&mut self.state, now_ms),
        })
    }

    /// Care action, throttled per kind.
    pub fn perform_action(&mut self, action: ActionKind) -> Option<ActionReport> {
        let now = self.clock.now();
        if self.throttled(action, now.millis) {
            log::debug!("Action {} rejected: throttled", action.name());
            return None;
        }
        self.apply_action(action, now.millis)
    }

    /// Settle a finished mini-game: its base action, then the differential.
    ///
    /// The base action is not throttled here; the game itself took longer
    /// than the throttle window.
    pub fn play_mini_game(
        &mut self,
        kind: MiniGameKind,
        score: u32,
        max_score: u32,
    ) -> Option<MiniGameReport> {
        let now = self.clock.now();
        let settlement = settle(kind, score, max_score);
        let mut action = self.apply_action(kind.base_action(), now.millis)?;
        complete_mini_game(&mut self.state, settlement.bonus_coins, &settlement.stats);
        action
            .new_achievements
            .extend(check_achievements(&mut self.state, now.millis));
        Some(MiniGameReport { action, settlement })
    }

    /// Perform a trick. Its bond gain may unlock further tricks and
    /// achievements, which are reported here and not again by `tick`.
    pub fn perform_trick(&mut self, trick: TrickId) -> Option<TrickReport> {
        let now = self.clock.now();
        let reward = perform_trick(&mut self.state, trick, now.millis)?;
        Some(TrickReport {
            reward,
            new_tricks: check_unlock_tricks(&mut self.state),
            new_achievements: check_achievements(&mut self.state, now.millis),
        })
    }

    // ------------------------------------------------------------------
    // Rewards
    // ------------------------------------------------------------------

    pub fn claim_task(&mut self, task_id: &str) -> Option<TaskReward> {
        claim_task(&mut self.state, task_id)
    }

    pub fn collect_streak_reward(&mut self) -> StreakReward {
        collect_streak_reward(&mut self.state)
    }

    pub fn can_claim_daily_gift(&self) -> bool {
        can_claim_daily_gift(&self.state, self.clock.now().date)
    }

    pub fn claim_daily_gift(&mut self) -> Option<&'static DailyGift> {
        let today = self.clock.now().date;
        claim_daily_gift(&mut self.state, today)
    }

    /// Roll an event for `trigger` and apply its whole reward.
    pub fn trigger_event(&mut self, trigger: EventTrigger) -> Option<&'static RandomEventDef> {
        if !self.state.is_onboarded() {
            return None;
        }
        let now = self.clock.now();
        let event = try_trigger_event(&mut self.state, trigger, now.millis, &mut self.rng)?;
        apply_event_reward(&mut self.state, &event.reward);
        Some(event)
    }

    pub fn witness_event(&mut self, event_id: &str) -> bool {
        record_event_witnessed(&mut self.state, event_id)
    }

    // ------------------------------------------------------------------
    // Shop & wardrobe
    // ------------------------------------------------------------------

    pub fn purchase_item(&mut self, item_id: &str) -> bool {
        purchase_item(&mut self.state, item_id)
    }

    pub fn equip_item(&mut self, item_id: &str) -> bool {
        equip_item(&mut self.state, item_id)
    }

    pub fn unequip(&mut self, slot: ItemCategory) -> bool {
        unequip_item(&mut self.state, slot)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Save game state to a writer
    pub fn save<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        persistence::save_state(writer, &self.state)
    }

    /// Load game state from a reader
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), SaveError> {
        self.state = persistence::load_state(reader)?;
        self.last_action_at.clear();
        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), SaveError> {
        persistence::save_to_path(path, &self.state)
    }

    /// Load the save slot if there is one. Returns whether a save was found.
    pub fn load_from_path(&mut self, path: &Path) -> Result<bool, SaveError> {
        match persistence::load_from_path(path)? {
            Some(state) => {
                self.state = state;
                self.last_action_at.clear();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn export_json(&self) -> Result<String, SaveError> {
        persistence::export_json(&self.state)
    }

    pub fn import_json(&mut self, json: &str) -> Result<(), SaveError> {
        self.state = persistence::import_json(json)?;
        self.last_action_at.clear();
        Ok(())
    }
}
