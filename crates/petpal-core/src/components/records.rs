//! Lifetime counters and achievement progress.

use petpal_logic::achievements::{AchievementId, ACHIEVEMENTS};
use petpal_logic::actions::ActionKind;
use serde::{Deserialize, Serialize};

/// Keys for [`Statistics`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    TotalFeeds,
    TotalWaters,
    TotalPlays,
    TotalWalks,
    TotalBaths,
    TotalSleeps,
    TotalMiniGames,
    TotalActions,
    TotalCoinsEarned,
    TotalCoinsSpent,
    TotalTasksCompleted,
    TotalTricksPerformed,
    DaysPlayed,
    RandomEventsWitnessed,
}

impl Statistic {
    /// The per-action counter bumped by a care action.
    pub fn for_action(action: ActionKind) -> Self {
        match action {
            ActionKind::Feed => Statistic::TotalFeeds,
            ActionKind::Water => Statistic::TotalWaters,
            ActionKind::Play => Statistic::TotalPlays,
            ActionKind::Walk => Statistic::TotalWalks,
            ActionKind::Bath => Statistic::TotalBaths,
            ActionKind::Sleep => Statistic::TotalSleeps,
        }
    }
}

/// Monotonic counters. Only a full game reset lowers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_feeds: u64,
    pub total_waters: u64,
    pub total_plays: u64,
    pub total_walks: u64,
    pub total_baths: u64,
    pub total_sleeps: u64,
    pub total_mini_games: u64,
    pub total_actions: u64,
    pub total_coins_earned: u64,
    pub total_coins_spent: u64,
    pub total_tasks_completed: u64,
    pub total_tricks_performed: u64,
    pub days_played: u64,
    pub random_events_witnessed: u64,
}

impl Statistics {
    fn slot(&mut self, stat: Statistic) -> &mut u64 {
        match stat {
            Statistic::TotalFeeds => &mut self.total_feeds,
            Statistic::TotalWaters => &mut self.total_waters,
            Statistic::TotalPlays => &mut self.total_plays,
            Statistic::TotalWalks => &mut self.total_walks,
            Statistic::TotalBaths => &mut self.total_baths,
            Statistic::TotalSleeps => &mut self.total_sleeps,
            Statistic::TotalMiniGames => &mut self.total_mini_games,
            Statistic::TotalActions => &mut self.total_actions,
            Statistic::TotalCoinsEarned => &mut self.total_coins_earned,
            Statistic::TotalCoinsSpent => &mut self.total_coins_spent,
            Statistic::TotalTasksCompleted => &mut self.total_tasks_completed,
            Statistic::TotalTricksPerformed => &mut self.total_tricks_performed,
            Statistic::DaysPlayed => &mut self.days_played,
            Statistic::RandomEventsWitnessed => &mut self.random_events_witnessed,
        }
    }

    pub fn get(&self, stat: Statistic) -> u64 {
        match stat {
            Statistic::TotalFeeds => self.total_feeds,
            Statistic::TotalWaters => self.total_waters,
            Statistic::TotalPlays => self.total_plays,
            Statistic::TotalWalks => self.total_walks,
            Statistic::TotalBaths => self.total_baths,
            Statistic::TotalSleeps => self.total_sleeps,
            Statistic::TotalMiniGames => self.total_mini_games,
            Statistic::TotalActions => self.total_actions,
            Statistic::TotalCoinsEarned => self.total_coins_earned,
            Statistic::TotalCoinsSpent => self.total_coins_spent,
            Statistic::TotalTasksCompleted => self.total_tasks_completed,
            Statistic::TotalTricksPerformed => self.total_tricks_performed,
            Statistic::DaysPlayed => self.days_played,
            Statistic::RandomEventsWitnessed => self.random_events_witnessed,
        }
    }

    pub fn bump(&mut self, stat: Statistic, amount: u64) {
        let slot = self.slot(stat);
        *slot = slot.saturating_add(amount);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub id: AchievementId,
    /// One-way.
    pub unlocked: bool,
    pub unlocked_at: Option<i64>,
    /// Last observed metric value, capped at the target.
    pub progress: u64,
}

impl AchievementProgress {
    pub fn locked(id: AchievementId) -> Self {
        Self {
            id,
            unlocked: false,
            unlocked_at: None,
            progress: 0,
        }
    }
}

/// One locked entry per achievement, in table order.
pub fn initial_achievements() -> Vec<AchievementProgress> {
    ACHIEVEMENTS
        .iter()
        .map(|a| AchievementProgress::locked(a.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_and_get() {
        let mut s = Statistics::default();
        s.bump(Statistic::for_action(ActionKind::Feed), 1);
        s.bump(Statistic::TotalCoinsEarned, 40);
        s.bump(Statistic::TotalCoinsEarned, 2);
        assert_eq!(s.total_feeds, 1);
        assert_eq!(s.get(Statistic::TotalCoinsEarned), 42);
        assert_eq!(s.get(Statistic::TotalWalks), 0);
    }

    #[test]
    fn test_bump_saturates() {
        let mut s = Statistics {
            total_actions: u64::MAX - 1,
            ..Default::default()
        };
        s.bump(Statistic::TotalActions, 5);
        assert_eq!(s.total_actions, u64::MAX);
    }

    #[test]
    fn test_initial_achievements_cover_table() {
        let all = initial_achievements();
        assert_eq!(all.len(), ACHIEVEMENTS.len());
        assert!(all.iter().all(|a| !a.unlocked && a.unlocked_at.is_none()));
    }
}
