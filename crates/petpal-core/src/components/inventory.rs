//! Owned items and what is equipped in each slot.

use std::collections::BTreeSet;

use petpal_logic::items::{default_items, item_by_id, ItemCategory};
use serde::{Deserialize, Serialize};

/// One slot per wearable or decor category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItems {
    pub hat: Option<String>,
    pub collar: Option<String>,
    pub floor: Option<String>,
    pub wall: Option<String>,
    pub bed: Option<String>,
    pub toy: Option<String>,
}

impl EquippedItems {
    pub fn get(&self, category: ItemCategory) -> Option<&str> {
        match category {
            ItemCategory::Hat => self.hat.as_deref(),
            ItemCategory::Collar => self.collar.as_deref(),
            ItemCategory::Floor => self.floor.as_deref(),
            ItemCategory::Wall => self.wall.as_deref(),
            ItemCategory::Bed => self.bed.as_deref(),
            ItemCategory::Toy => self.toy.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, category: ItemCategory) -> &mut Option<String> {
        match category {
            ItemCategory::Hat => &mut self.hat,
            ItemCategory::Collar => &mut self.collar,
            ItemCategory::Floor => &mut self.floor,
            ItemCategory::Wall => &mut self.wall,
            ItemCategory::Bed => &mut self.bed,
            ItemCategory::Toy => &mut self.toy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.hat,
            &self.collar,
            &self.floor,
            &self.wall,
            &self.bed,
            &self.toy,
        ]
        .into_iter()
        .filter_map(|s| s.as_deref())
    }
}

impl Default for EquippedItems {
    fn default() -> Self {
        let mut equipped = Self {
            hat: None,
            collar: None,
            floor: None,
            wall: None,
            bed: None,
            toy: None,
        };
        for item in default_items() {
            *equipped.slot_mut(item.category) = Some(item.id.to_string());
        }
        equipped
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Grows only.
    pub owned: BTreeSet<String>,
    pub equipped: EquippedItems,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            owned: default_items().map(|i| i.id.to_string()).collect(),
            equipped: EquippedItems::default(),
        }
    }
}

impl Inventory {
    pub fn owns(&self, item_id: &str) -> bool {
        self.owned.contains(item_id)
    }

    /// Owned items that are room decor.
    pub fn decor_count(&self) -> usize {
        self.owned
            .iter()
            .filter_map(|id| item_by_id(id))
            .filter(|item| item.category.is_decor())
            .count()
    }

    /// Every equipped id is owned.
    pub fn is_consistent(&self) -> bool {
        self.equipped.iter().all(|id| self.owns(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_owned_and_equipped() {
        let inv = Inventory::default();
        assert_eq!(inv.owned.len(), 4);
        assert_eq!(inv.equipped.get(ItemCategory::Floor), Some("floor_01"));
        assert_eq!(inv.equipped.get(ItemCategory::Toy), Some("toy_01"));
        assert_eq!(inv.equipped.get(ItemCategory::Hat), None);
        assert!(inv.is_consistent());
        assert_eq!(inv.decor_count(), 4);
    }

    #[test]
    fn test_slot_mut_targets_its_category() {
        let mut eq = EquippedItems::default();
        *eq.slot_mut(ItemCategory::Collar) = Some("collar_02".into());
        assert_eq!(eq.get(ItemCategory::Collar), Some("collar_02"));
        assert_eq!(eq.iter().count(), 5);
    }
}
