//! Rotating reward calendars: the daily gift and the login-streak reward.
//!
//! Both tables are seven days long and indexed by `(streak - 1) % 7`, so a
//! streak of 8 gets day 1's reward again.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyGift {
    /// 1-based day in the calendar.
    pub day: u32,
    pub coins: u64,
    pub xp: u64,
    pub item: Option<&'static str>,
    pub rare: bool,
}

const fn gift(day: u32, coins: u64, xp: u64) -> DailyGift {
    DailyGift {
        day,
        coins,
        xp,
        item: None,
        rare: false,
    }
}

pub const DAILY_GIFTS: [DailyGift; 7] = [
    gift(1, 20, 5),
    gift(2, 25, 10),
    gift(3, 30, 15),
    gift(4, 40, 20),
    gift(5, 50, 25),
    DailyGift { rare: true, ..gift(6, 75, 30) },
    DailyGift {
        rare: true,
        item: Some("hat_party"),
        ..gift(7, 100, 50)
    },
];

/// Coins and XP paid once per login-streak day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakReward {
    pub coins: u64,
    pub xp: u64,
}

pub const STREAK_REWARDS: [StreakReward; 7] = [
    StreakReward { coins: 10, xp: 0 },
    StreakReward { coins: 15, xp: 0 },
    StreakReward { coins: 20, xp: 10 },
    StreakReward { coins: 25, xp: 0 },
    StreakReward { coins: 30, xp: 15 },
    StreakReward { coins: 40, xp: 0 },
    StreakReward { coins: 50, xp: 25 },
];

fn day_index(streak: u32) -> usize {
    (streak.max(1) as usize - 1) % 7
}

pub fn gift_for_streak(streak: u32) -> &'static DailyGift {
    &DAILY_GIFTS[day_index(streak)]
}

pub fn streak_reward(streak: u32) -> StreakReward {
    STREAK_REWARDS[day_index(streak)]
}
