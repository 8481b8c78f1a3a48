//! Daily/weekly task generation, reset, progress and claims.

use chrono::NaiveDate;
use petpal_logic::calendar::week_start;
use petpal_logic::tasks::{
    templates_for, TaskEvent, TaskPeriod, TaskTemplate, DAILY_TEMPLATES, WEEKLY_TEMPLATES,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::GameTime;
use crate::components::{GameState, Statistic, Task, TaskReward};
use crate::systems::{add_coins, add_xp, grant_item};

fn roll_task(template: &TaskTemplate, id: String, rng: &mut impl Rng) -> Task {
    let (lo, hi) = template.target_range;
    let (coins_lo, coins_hi) = template.coin_range;
    Task {
        id,
        template: template.id,
        period: template.period,
        target: rng.gen_range(lo..=hi),
        current: 0,
        reward: TaskReward {
            coins: rng.gen_range(coins_lo..=coins_hi),
            xp: template.xp,
            item: template.item.map(str::to_string),
        },
        completed: false,
    }
}

/// `count` daily tasks from distinct templates.
pub fn generate_daily_tasks(count: usize, now_ms: i64, rng: &mut impl Rng) -> Vec<Task> {
    let picked: Vec<&TaskTemplate> = DAILY_TEMPLATES.choose_multiple(rng, count).collect();
    picked
        .into_iter()
        .enumerate()
        .map(|(index, template)| {
            let id = format!("{}_{}_{}", template.id.key(), now_ms, index);
            roll_task(template, id, rng)
        })
        .collect()
}

pub fn generate_weekly_task(now_ms: i64, rng: &mut impl Rng) -> Task {
    let template = &WEEKLY_TEMPLATES[rng.gen_range(0..WEEKLY_TEMPLATES.len())];
    let id = format!("{}_{}", template.id.key(), now_ms);
    roll_task(template, id, rng)
}

/// Which task sets a reset check replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskResets {
    pub daily: bool,
    pub weekly: bool,
}

/// Replace daily tasks on a new calendar day and the weekly task on a new
/// week. Outgoing tasks are discarded whatever their progress.
pub fn check_and_reset_tasks(
    state: &mut GameState,
    now: GameTime,
    daily_count: usize,
    rng: &mut impl Rng,
) -> TaskResets {
    let mut resets = TaskResets::default();

    if state.last_daily_reset != Some(now.date) {
        state.daily_tasks = generate_daily_tasks(daily_count, now.millis, rng);
        state.last_daily_reset = Some(now.date);
        resets.daily = true;
    }

    let monday: NaiveDate = week_start(now.date);
    if state.last_weekly_reset != Some(monday) {
        state.weekly_task = Some(generate_weekly_task(now.millis, rng));
        state.last_weekly_reset = Some(monday);
        resets.weekly = true;
    }

    if resets.daily || resets.weekly {
        log::info!(
            "Tasks reset on {} (daily: {}, weekly: {})",
            now.date,
            resets.daily,
            resets.weekly
        );
    }
    resets
}

/// Advance every open task fed by `event`, clamped to its target.
pub fn advance_tasks(state: &mut GameState, event: TaskEvent, amount: u32) {
    if amount == 0 {
        return;
    }
    let templates = templates_for(event);
    for task in state.tasks_mut() {
        if task.completed || !templates.contains(&task.template) {
            continue;
        }
        task.current = task.current.saturating_add(amount).min(task.target);
    }
}

/// Pay out a finished task. `None` if unknown, unfinished or already claimed.
pub fn claim_task(state: &mut GameState, task_id: &str) -> Option<TaskReward> {
    let task = state.tasks_mut().find(|t| t.id == task_id)?;
    if !task.is_claimable() {
        log::debug!(
            "Claim rejected for {}: {}/{} completed={}",
            task.id,
            task.current,
            task.target,
            task.completed
        );
        return None;
    }
    task.completed = true;
    let reward = task.reward.clone();
    let period = task.period;

    add_coins(state, reward.coins);
    add_xp(state, reward.xp);
    if let Some(item) = &reward.item {
        grant_item(state, item);
    }
    state.statistics.bump(Statistic::TotalTasksCompleted, 1);
    if period == TaskPeriod::Daily {
        advance_tasks(state, TaskEvent::DailyTaskClaimed, 1);
    }

    log::info!("Task {} claimed: {} coins, {} xp", task_id, reward.coins, reward.xp);
    Some(reward)
}
