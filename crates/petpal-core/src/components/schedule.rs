//! Calendar-driven state: tasks, the login streak and the daily gift.

use chrono::NaiveDate;
use petpal_logic::tasks::{TaskPeriod, TaskTemplateId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReward {
    pub coins: u64,
    pub xp: u64,
    pub item: Option<String>,
}

/// A task rolled from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// `{template key}_{millis}_{index}`, unique per generation.
    pub id: String,
    pub template: TaskTemplateId,
    pub period: TaskPeriod,
    pub target: u32,
    /// Never exceeds `target`.
    pub current: u32,
    pub reward: TaskReward,
    /// Set when the reward is claimed; never cleared.
    pub completed: bool,
}

impl Task {
    pub fn description_key(&self) -> &'static str {
        self.template.template().description_key
    }

    pub fn is_claimable(&self) -> bool {
        !self.completed && self.current >= self.target
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    /// Never below `current`.
    pub longest: u32,
    pub last_login_date: Option<NaiveDate>,
    /// Streak reward collected for the current streak day.
    pub today_collected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGiftState {
    pub last_claimed: Option<NaiveDate>,
    pub streak: u32,
}
