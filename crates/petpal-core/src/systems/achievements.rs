//! Achievement evaluator

use petpal_logic::achievements::{AchievementId, Metric, ACHIEVEMENTS};

use crate::components::GameState;
use crate::systems::{add_coins, grant_item};

/// Current value of a metric in the saved game.
pub fn metric_value(state: &GameState, metric: Metric) -> u64 {
    let s = &state.statistics;
    match metric {
        Metric::TotalFeeds => s.total_feeds,
        Metric::TotalWaters => s.total_waters,
        Metric::TotalBaths => s.total_baths,
        Metric::TotalPlays => s.total_plays,
        Metric::TotalWalks => s.total_walks,
        Metric::TotalSleeps => s.total_sleeps,
        Metric::TotalMiniGames => s.total_mini_games,
        Metric::TotalCoinsEarned => s.total_coins_earned,
        Metric::TotalTasksCompleted => s.total_tasks_completed,
        Metric::EventsWitnessed => s.random_events_witnessed,
        Metric::Level => u64::from(state.progression.level),
        Metric::Bond => u64::from(state.progression.bond),
        Metric::LongestStreak => u64::from(state.streak.longest),
        Metric::OwnedItems => state.inventory.owned.len() as u64,
        Metric::OwnedDecor => state.inventory.decor_count() as u64,
    }
}

/// Unlock every achievement whose metric has reached its target.
///
/// Metrics are read once before any reward is paid, so coins from one
/// unlock count toward others only on the next evaluation. Already
/// unlocked entries are never touched again.
pub fn check_achievements(state: &mut GameState, now_ms: i64) -> Vec<AchievementId> {
    let observed: Vec<(AchievementId, u64, u64)> = ACHIEVEMENTS
        .iter()
        .map(|a| (a.id, metric_value(state, a.metric), a.target))
        .collect();

    let mut unlocked = Vec::new();
    for (id, value, target) in observed {
        let Some(entry) = state.achievements.iter_mut().find(|e| e.id == id) else {
            continue;
        };
        if entry.unlocked {
            continue;
        }
        if value >= target {
            entry.unlocked = true;
            entry.unlocked_at = Some(now_ms);
            entry.progress = target;
            unlocked.push(id);
        } else {
            entry.progress = value;
        }
    }

    for id in &unlocked {
        let def = petpal_logic::achievements::achievement(*id);
        add_coins(state, def.reward.coins);
        if let Some(item) = def.reward.item {
            grant_item(state, item);
        }
        log::info!("Achievement unlocked: {:?}", id);
    }
    unlocked
}
