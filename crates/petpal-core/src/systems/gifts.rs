//! Daily gift: one claim per calendar day with its own streak.

use chrono::NaiveDate;
use petpal_logic::calendar::is_day_after;
use petpal_logic::gifts::{gift_for_streak, DailyGift};

use crate::components::GameState;
use crate::systems::{add_coins, add_xp, grant_item};

pub fn can_claim_daily_gift(state: &GameState, today: NaiveDate) -> bool {
    state.daily_gift.last_claimed != Some(today)
}

/// Claim today's gift. `None` if already claimed today.
pub fn claim_daily_gift(state: &mut GameState, today: NaiveDate) -> Option<&'static DailyGift> {
    if !can_claim_daily_gift(state, today) {
        log::debug!("Daily gift already claimed on {}", today);
        return None;
    }

    let gift_state = &mut state.daily_gift;
    gift_state.streak = match gift_state.last_claimed {
        Some(last) if is_day_after(last, today) => gift_state.streak + 1,
        _ => 1,
    };
    gift_state.last_claimed = Some(today);

    let gift = gift_for_streak(gift_state.streak);
    add_coins(state, gift.coins);
    add_xp(state, gift.xp);
    if let Some(item) = gift.item {
        grant_item(state, item);
    }
    log::info!("Daily gift day {} claimed", gift.day);
    Some(gift)
}
