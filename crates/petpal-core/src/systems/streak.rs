//! Login streak and its once-a-day reward.

use chrono::NaiveDate;
use petpal_logic::calendar::is_day_after;
use petpal_logic::gifts::{streak_reward, StreakReward};
use petpal_logic::tasks::TaskEvent;

use crate::components::{GameState, Statistic};
use crate::systems::{add_coins, add_xp, advance_tasks};

/// First check of a calendar day advances or resets the streak.
///
/// Returns `false` when today was already counted.
pub fn check_streak(state: &mut GameState, today: NaiveDate) -> bool {
    let streak = &mut state.streak;
    match streak.last_login_date {
        Some(last) if last == today => return false,
        Some(last) if is_day_after(last, today) => streak.current += 1,
        _ => streak.current = 1,
    }
    streak.longest = streak.longest.max(streak.current);
    streak.last_login_date = Some(today);
    streak.today_collected = false;
    let current = streak.current;

    state.statistics.bump(Statistic::DaysPlayed, 1);
    advance_tasks(state, TaskEvent::Login, 1);
    log::info!("Login streak: {} day(s)", current);
    true
}

/// Collect the reward for the current streak day. Zero if already taken.
pub fn collect_streak_reward(state: &mut GameState) -> StreakReward {
    if state.streak.today_collected {
        log::debug!("Streak reward already collected");
        return StreakReward::default();
    }
    let reward = streak_reward(state.streak.current);
    add_coins(state, reward.coins);
    add_xp(state, reward.xp);
    state.streak.today_collected = true;
    reward
}
