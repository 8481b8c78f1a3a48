//! Shop purchases, rewards that hand out items, and the wardrobe.

use petpal_logic::items::{item_by_id, ItemCategory};

use crate::components::GameState;
use crate::systems::spend_coins;

/// Add an item to the inventory for free. Returns `false` if already owned
/// or not in the catalog.
pub fn grant_item(state: &mut GameState, item_id: &str) -> bool {
    if item_by_id(item_id).is_none() {
        log::warn!("Reward references unknown item {}", item_id);
        return false;
    }
    state.inventory.owned.insert(item_id.to_string())
}

/// Buy an item at its catalog price.
pub fn purchase_item(state: &mut GameState, item_id: &str) -> bool {
    let Some(item) = item_by_id(item_id) else {
        log::debug!("Purchase rejected: unknown item {}", item_id);
        return false;
    };
    if item.reward_only || state.inventory.owns(item_id) {
        log::debug!("Purchase rejected: {} not for sale or already owned", item_id);
        return false;
    }
    if !spend_coins(state, item.price) {
        return false;
    }
    state.inventory.owned.insert(item.id.to_string());
    log::info!("Purchased {} for {} coins", item.id, item.price);
    true
}

/// Put an owned item into its category's slot.
pub fn equip_item(state: &mut GameState, item_id: &str) -> bool {
    let Some(item) = item_by_id(item_id) else {
        return false;
    };
    if !state.inventory.owns(item_id) {
        log::debug!("Equip rejected: {} not owned", item_id);
        return false;
    }
    *state.inventory.equipped.slot_mut(item.category) = Some(item.id.to_string());
    true
}

/// Empty a slot. Only hat and collar can be left empty.
pub fn unequip_item(state: &mut GameState, category: ItemCategory) -> bool {
    if !category.is_optional_slot() {
        return false;
    }
    state.inventory.equipped.slot_mut(category).take().is_some()
}
