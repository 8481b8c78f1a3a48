//! Achievement definitions and the metric each one watches.
//!
//! The metric values themselves are read from the saved game by the engine;
//! this module only says *which* metric an achievement is bound to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AchievementId {
    Feed100,
    Water100,
    Bath50,
    Play100,
    Walk50,
    Sleep30,
    Level5,
    Level10,
    Level15,
    Level20,
    Bond100,
    Streak7,
    Streak30,
    Streak90,
    Events10,
    Items10,
    Decor5,
    Tasks50,
    MiniGames50,
    Coins1000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementCategory {
    Care,
    Progress,
    Streak,
    Discovery,
}

/// A progression number an achievement compares against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalFeeds,
    TotalWaters,
    TotalBaths,
    TotalPlays,
    TotalWalks,
    TotalSleeps,
    TotalMiniGames,
    TotalCoinsEarned,
    TotalTasksCompleted,
    EventsWitnessed,
    Level,
    Bond,
    LongestStreak,
    OwnedItems,
    OwnedDecor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementReward {
    pub coins: u64,
    pub item: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name_key: &'static str,
    pub category: AchievementCategory,
    pub metric: Metric,
    pub target: u64,
    pub reward: AchievementReward,
}

const fn def(
    id: AchievementId,
    name_key: &'static str,
    category: AchievementCategory,
    metric: Metric,
    target: u64,
    coins: u64,
    item: Option<&'static str>,
) -> AchievementDef {
    AchievementDef {
        id,
        name_key,
        category,
        metric,
        target,
        reward: AchievementReward { coins, item },
    }
}

use AchievementCategory as Cat;
use AchievementId as Id;

/// Evaluation order is table order.
pub const ACHIEVEMENTS: [AchievementDef; 20] = [
    // Care
    def(Id::Feed100, "achievement.gourmet", Cat::Care, Metric::TotalFeeds, 100, 50, None),
    def(Id::Water100, "achievement.waterFairy", Cat::Care, Metric::TotalWaters, 100, 50, None),
    def(Id::Bath50, "achievement.cleanExpert", Cat::Care, Metric::TotalBaths, 50, 50, None),
    def(Id::Play100, "achievement.playMaster", Cat::Care, Metric::TotalPlays, 100, 100, None),
    def(Id::Walk50, "achievement.explorer", Cat::Care, Metric::TotalWalks, 50, 75, None),
    def(Id::Sleep30, "achievement.sleepRoutine", Cat::Care, Metric::TotalSleeps, 30, 50, None),
    // Progress
    def(Id::Level5, "achievement.beginner", Cat::Progress, Metric::Level, 5, 25, None),
    def(Id::Level10, "achievement.experienced", Cat::Progress, Metric::Level, 10, 50, None),
    def(Id::Level15, "achievement.expert", Cat::Progress, Metric::Level, 15, 100, None),
    def(Id::Level20, "achievement.master", Cat::Progress, Metric::Level, 20, 200, Some("hat_10")),
    def(Id::Bond100, "achievement.soulmate", Cat::Progress, Metric::Bond, 100, 300, None),
    // Streak
    def(Id::Streak7, "achievement.oneWeek", Cat::Streak, Metric::LongestStreak, 7, 50, None),
    def(Id::Streak30, "achievement.oneMonth", Cat::Streak, Metric::LongestStreak, 30, 200, Some("hat_04")),
    def(Id::Streak90, "achievement.threeMonths", Cat::Streak, Metric::LongestStreak, 90, 500, Some("collar_06")),
    // Discovery
    def(Id::Events10, "achievement.butterflyHunter", Cat::Discovery, Metric::EventsWitnessed, 10, 30, None),
    def(Id::Items10, "achievement.collector", Cat::Discovery, Metric::OwnedItems, 10, 50, None),
    def(Id::Decor5, "achievement.decorator", Cat::Discovery, Metric::OwnedDecor, 5, 40, None),
    def(Id::Tasks50, "achievement.taskHunter", Cat::Discovery, Metric::TotalTasksCompleted, 50, 100, None),
    def(Id::MiniGames50, "achievement.gamer", Cat::Discovery, Metric::TotalMiniGames, 50, 75, None),
    def(Id::Coins1000, "achievement.wealthy", Cat::Discovery, Metric::TotalCoinsEarned, 1000, 100, None),
];

pub fn achievement(id: AchievementId) -> &'static AchievementDef {
    // Every id has exactly one row; checked by `test_every_id_has_a_row`.
    ACHIEVEMENTS
        .iter()
        .find(|a| a.id == id)
        .unwrap_or(&ACHIEVEMENTS[0])
}

pub fn achievements_in(category: AchievementCategory) -> impl Iterator<Item = &'static AchievementDef> {
    ACHIEVEMENTS.iter().filter(move |a| a.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item_by_id;

    #[test]
    fn test_every_id_has_a_row() {
        let ids = [
            Id::Feed100, Id::Water100, Id::Bath50, Id::Play100, Id::Walk50, Id::Sleep30,
            Id::Level5, Id::Level10, Id::Level15, Id::Level20, Id::Bond100, Id::Streak7,
            Id::Streak30, Id::Streak90, Id::Events10, Id::Items10, Id::Decor5, Id::Tasks50,
            Id::MiniGames50, Id::Coins1000,
        ];
        for id in ids {
            assert_eq!(ACHIEVEMENTS.iter().filter(|a| a.id == id).count(), 1, "{id:?}");
            assert_eq!(achievement(id).id, id);
        }
    }

    #[test]
    fn test_reward_items_exist_in_catalog() {
        for a in &ACHIEVEMENTS {
            if let Some(item) = a.reward.item {
                assert!(item_by_id(item).is_some(), "{item}");
            }
        }
    }

    #[test]
    fn test_level_targets_reachable() {
        for a in ACHIEVEMENTS.iter().filter(|a| a.metric == Metric::Level) {
            assert!(a.target <= u64::from(crate::constants::limits::MAX_LEVEL));
        }
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(achievements_in(AchievementCategory::Streak).count(), 3);
        assert_eq!(achievements_in(AchievementCategory::Care).count(), 6);
    }
}
