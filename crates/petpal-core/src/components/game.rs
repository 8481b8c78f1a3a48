//! The aggregate root.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use petpal_logic::achievements::AchievementId;
use petpal_logic::constants::GAME_VERSION;
use petpal_logic::progression::AgeStage;
use petpal_logic::stats::StatVector;
use petpal_logic::tricks::TrickId;
use serde::{Deserialize, Serialize};

use super::{
    initial_achievements, AchievementProgress, DailyGiftState, Inventory, PetProfile,
    Progression, Settings, Statistics, Streak, Task,
};

/// Everything that survives a restart.
///
/// Systems receive `&mut GameState` and move it from one consistent state to
/// the next; nothing else holds a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub version: u32,
    /// `None` until onboarding.
    pub pet: Option<PetProfile>,
    pub stats: StatVector,
    /// Epoch millis of the last decay or action.
    pub last_update: i64,
    pub last_daily_reset: Option<NaiveDate>,
    pub last_weekly_reset: Option<NaiveDate>,
    pub progression: Progression,
    pub streak: Streak,
    pub daily_tasks: Vec<Task>,
    pub weekly_task: Option<Task>,
    pub achievements: Vec<AchievementProgress>,
    pub statistics: Statistics,
    pub inventory: Inventory,
    pub settings: Settings,
    pub last_random_event: Option<i64>,
    pub seen_events: Vec<String>,
    pub daily_gift: DailyGiftState,
    pub unlocked_tricks: BTreeSet<TrickId>,
    pub last_trick_performed: Option<i64>,
    pub age_stage: AgeStage,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            version: GAME_VERSION,
            pet: None,
            stats: StatVector::default(),
            last_update: 0,
            last_daily_reset: None,
            last_weekly_reset: None,
            progression: Progression::default(),
            streak: Streak::default(),
            daily_tasks: Vec::new(),
            weekly_task: None,
            achievements: initial_achievements(),
            statistics: Statistics::default(),
            inventory: Inventory::default(),
            settings: Settings::default(),
            last_random_event: None,
            seen_events: Vec::new(),
            daily_gift: DailyGiftState::default(),
            unlocked_tricks: BTreeSet::from([TrickId::Sit]),
            last_trick_performed: None,
            age_stage: AgeStage::default(),
        }
    }
}

impl GameState {
    pub fn is_onboarded(&self) -> bool {
        self.pet.is_some()
    }

    pub fn achievement(&self, id: AchievementId) -> Option<&AchievementProgress> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Daily tasks followed by the weekly task.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.daily_tasks.iter().chain(self.weekly_task.iter())
    }

    pub fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.daily_tasks.iter_mut().chain(self.weekly_task.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petpal_logic::progression::BondTier;

    #[test]
    fn test_initial_state() {
        let s = GameState::default();
        assert!(!s.is_onboarded());
        assert_eq!(s.progression.coins, 50);
        assert_eq!(s.progression.level, 1);
        assert_eq!(s.progression.bond_tier, BondTier::Stranger);
        assert_eq!(s.stats, StatVector::splat(80));
        assert!(s.unlocked_tricks.contains(&TrickId::Sit));
        assert_eq!(s.unlocked_tricks.len(), 1);
        assert!(s.inventory.is_consistent());
        assert!(!s.achievement(AchievementId::Feed100).unwrap().unlocked);
    }
}
