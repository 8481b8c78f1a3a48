//! Daily and weekly task templates, and which progress events feed them.
//!
//! Generated tasks keep a [`TaskTemplateId`] so progress routing is an enum
//! match, not a prefix comparison on the task's string id.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPeriod {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskTemplateId {
    DailyFeed,
    DailyWater,
    DailyPlay,
    DailyWalk,
    DailyBath,
    DailyMiniGame,
    DailyStats50,
    DailyActions,
    WeeklyLogin7,
    WeeklyMiniGames20,
    WeeklyActions50,
    WeeklyDailyComplete5,
    WeeklySpend500,
    WeeklyBond10,
    WeeklyFeed30,
}

impl TaskTemplateId {
    /// Stable key used as the prefix of generated task ids.
    pub fn key(self) -> &'static str {
        match self {
            TaskTemplateId::DailyFeed => "daily_feed",
            TaskTemplateId::DailyWater => "daily_water",
            TaskTemplateId::DailyPlay => "daily_play",
            TaskTemplateId::DailyWalk => "daily_walk",
            TaskTemplateId::DailyBath => "daily_bath",
            TaskTemplateId::DailyMiniGame => "daily_minigame",
            TaskTemplateId::DailyStats50 => "daily_stats_50",
            TaskTemplateId::DailyActions => "daily_actions",
            TaskTemplateId::WeeklyLogin7 => "weekly_login_7",
            TaskTemplateId::WeeklyMiniGames20 => "weekly_minigames_20",
            TaskTemplateId::WeeklyActions50 => "weekly_actions_50",
            TaskTemplateId::WeeklyDailyComplete5 => "weekly_daily_complete_5",
            TaskTemplateId::WeeklySpend500 => "weekly_spend_500",
            TaskTemplateId::WeeklyBond10 => "weekly_bond_10",
            TaskTemplateId::WeeklyFeed30 => "weekly_feed_30",
        }
    }

    pub fn template(self) -> &'static TaskTemplate {
        DAILY_TEMPLATES
            .iter()
            .chain(WEEKLY_TEMPLATES.iter())
            .find(|t| t.id == self)
            .unwrap_or(&DAILY_TEMPLATES[0])
    }
}

/// Blueprint a concrete task is rolled from. Ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub id: TaskTemplateId,
    pub period: TaskPeriod,
    pub description_key: &'static str,
    pub target_range: (u32, u32),
    pub coin_range: (u64, u64),
    pub xp: u64,
    pub item: Option<&'static str>,
}

const fn daily(
    id: TaskTemplateId,
    description_key: &'static str,
    target_range: (u32, u32),
    coin_range: (u64, u64),
) -> TaskTemplate {
    TaskTemplate {
        id,
        period: TaskPeriod::Daily,
        description_key,
        target_range,
        coin_range,
        xp: 25,
        item: None,
    }
}

const fn weekly(
    id: TaskTemplateId,
    description_key: &'static str,
    target: u32,
    coins: u64,
    xp: u64,
    item: Option<&'static str>,
) -> TaskTemplate {
    TaskTemplate {
        id,
        period: TaskPeriod::Weekly,
        description_key,
        target_range: (target, target),
        coin_range: (coins, coins),
        xp,
        item,
    }
}

use TaskTemplateId as T;

pub const DAILY_TEMPLATES: [TaskTemplate; 8] = [
    daily(T::DailyFeed, "task.daily.feed", (2, 3), (15, 20)),
    daily(T::DailyWater, "task.daily.water", (2, 3), (15, 20)),
    daily(T::DailyPlay, "task.daily.play", (1, 2), (20, 25)),
    daily(T::DailyWalk, "task.daily.walk", (1, 2), (20, 25)),
    daily(T::DailyBath, "task.daily.bath", (1, 1), (15, 20)),
    daily(T::DailyMiniGame, "task.daily.minigame", (1, 2), (20, 30)),
    daily(T::DailyStats50, "task.daily.stats50", (1, 1), (30, 40)),
    daily(T::DailyActions, "task.daily.actions", (5, 8), (25, 35)),
];

pub const WEEKLY_TEMPLATES: [TaskTemplate; 7] = [
    weekly(T::WeeklyLogin7, "task.weekly.login7", 7, 200, 100, Some("hat_04")),
    weekly(T::WeeklyMiniGames20, "task.weekly.minigames20", 20, 150, 100, None),
    weekly(T::WeeklyActions50, "task.weekly.actions50", 50, 175, 100, None),
    weekly(T::WeeklyDailyComplete5, "task.weekly.dailyComplete5", 5, 200, 100, None),
    weekly(T::WeeklySpend500, "task.weekly.spend500", 500, 250, 100, None),
    weekly(T::WeeklyBond10, "task.weekly.bond10", 10, 150, 150, None),
    weekly(T::WeeklyFeed30, "task.weekly.feed30", 30, 125, 100, None),
];

/// Something that happened in play and may advance tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    /// A specific care action was performed.
    Action(ActionKind),
    /// Any care action was performed.
    AnyAction,
    MiniGame,
    Login,
    /// Coins spent (amount is the progress).
    Spend,
    /// Bond gained (amount is the progress).
    Bond,
    DailyTaskClaimed,
    /// Every stat reached 50 or more.
    StatsAbove50,
}

/// Templates that receive progress from an event.
pub fn templates_for(event: TaskEvent) -> &'static [TaskTemplateId] {
    match event {
        TaskEvent::Action(ActionKind::Feed) => &[T::DailyFeed, T::WeeklyFeed30],
        TaskEvent::Action(ActionKind::Water) => &[T::DailyWater],
        TaskEvent::Action(ActionKind::Play) => &[T::DailyPlay],
        TaskEvent::Action(ActionKind::Walk) => &[T::DailyWalk],
        TaskEvent::Action(ActionKind::Bath) => &[T::DailyBath],
        TaskEvent::Action(ActionKind::Sleep) => &[],
        TaskEvent::AnyAction => &[T::DailyActions, T::WeeklyActions50],
        TaskEvent::MiniGame => &[T::DailyMiniGame, T::WeeklyMiniGames20],
        TaskEvent::Login => &[T::WeeklyLogin7],
        TaskEvent::Spend => &[T::WeeklySpend500],
        TaskEvent::Bond => &[T::WeeklyBond10],
        TaskEvent::DailyTaskClaimed => &[T::WeeklyDailyComplete5],
        TaskEvent::StatsAbove50 => &[T::DailyStats50],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item_by_id;

    #[test]
    fn test_template_periods() {
        assert!(DAILY_TEMPLATES.iter().all(|t| t.period == TaskPeriod::Daily));
        assert!(WEEKLY_TEMPLATES.iter().all(|t| t.period == TaskPeriod::Weekly));
    }

    #[test]
    fn test_ranges_ordered() {
        for t in DAILY_TEMPLATES.iter().chain(WEEKLY_TEMPLATES.iter()) {
            assert!(t.target_range.0 >= 1 && t.target_range.0 <= t.target_range.1, "{:?}", t.id);
            assert!(t.coin_range.0 <= t.coin_range.1, "{:?}", t.id);
        }
    }

    #[test]
    fn test_template_lookup_roundtrips() {
        for t in DAILY_TEMPLATES.iter().chain(WEEKLY_TEMPLATES.iter()) {
            assert_eq!(t.id.template().id, t.id);
        }
    }

    #[test]
    fn test_routing_matches_period_keys() {
        assert_eq!(
            templates_for(TaskEvent::Action(ActionKind::Feed)),
            &[T::DailyFeed, T::WeeklyFeed30]
        );
        assert!(templates_for(TaskEvent::Action(ActionKind::Sleep)).is_empty());
        assert_eq!(T::WeeklyFeed30.key(), "weekly_feed_30");
    }

    #[test]
    fn test_every_template_is_reachable() {
        let events = [
            TaskEvent::Action(ActionKind::Feed),
            TaskEvent::Action(ActionKind::Water),
            TaskEvent::Action(ActionKind::Play),
            TaskEvent::Action(ActionKind::Walk),
            TaskEvent::Action(ActionKind::Bath),
            TaskEvent::Action(ActionKind::Sleep),
            TaskEvent::AnyAction,
            TaskEvent::MiniGame,
            TaskEvent::Login,
            TaskEvent::Spend,
            TaskEvent::Bond,
            TaskEvent::DailyTaskClaimed,
            TaskEvent::StatsAbove50,
        ];
        for t in DAILY_TEMPLATES.iter().chain(WEEKLY_TEMPLATES.iter()) {
            assert!(
                events.iter().any(|e| templates_for(*e).contains(&t.id)),
                "{:?} never receives progress",
                t.id
            );
        }
    }

    #[test]
    fn test_reward_items_exist() {
        for t in WEEKLY_TEMPLATES.iter() {
            if let Some(item) = t.item {
                assert!(item_by_id(item).is_some());
            }
        }
    }
}
