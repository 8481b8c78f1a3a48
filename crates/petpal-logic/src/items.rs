//! Shop catalog: cosmetics and room decor.

use serde::{Deserialize, Serialize};

/// Which wardrobe or room slot an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemCategory {
    Hat,
    Collar,
    Floor,
    Wall,
    Bed,
    Toy,
}

impl ItemCategory {
    /// Room decor, as opposed to things the pet wears.
    pub fn is_decor(self) -> bool {
        matches!(
            self,
            ItemCategory::Floor | ItemCategory::Wall | ItemCategory::Bed | ItemCategory::Toy
        )
    }

    /// Slots that may be left empty.
    pub fn is_optional_slot(self) -> bool {
        matches!(self, ItemCategory::Hat | ItemCategory::Collar)
    }
}

/// Passive effect attached to some toys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    PlayBonus(f64),
    HappinessBonus(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: &'static str,
    pub category: ItemCategory,
    pub name_key: &'static str,
    pub price: u64,
    pub rare: bool,
    /// Owned from the start and equipped in its slot.
    pub default: bool,
    /// Only obtainable as a reward, never sold.
    pub reward_only: bool,
    pub effect: Option<ItemEffect>,
}

const fn item(id: &'static str, category: ItemCategory, name_key: &'static str, price: u64) -> Item {
    Item {
        id,
        category,
        name_key,
        price,
        rare: false,
        default: false,
        reward_only: false,
        effect: None,
    }
}

const fn rare(mut it: Item) -> Item {
    it.rare = true;
    it
}

const fn default_item(mut it: Item) -> Item {
    it.default = true;
    it
}

const fn with_effect(mut it: Item, effect: ItemEffect) -> Item {
    it.effect = Some(effect);
    it
}

use ItemCategory::*;

pub const ITEMS: [Item; 38] = [
    // Hats
    item("hat_01", Hat, "item.hat.beanie", 100),
    item("hat_02", Hat, "item.hat.cowboy", 150),
    item("hat_03", Hat, "item.hat.crown", 300),
    item("hat_04", Hat, "item.hat.party", 120),
    item("hat_05", Hat, "item.hat.chef", 180),
    item("hat_06", Hat, "item.hat.pirate", 200),
    item("hat_07", Hat, "item.hat.halo", 250),
    item("hat_08", Hat, "item.hat.flower", 280),
    rare(item("hat_09", Hat, "item.hat.unicorn", 400)),
    rare(item("hat_10", Hat, "item.hat.golden", 500)),
    Item {
        reward_only: true,
        ..rare(item("hat_party", Hat, "item.hat.partyGift", 0))
    },
    // Collars
    item("collar_01", Collar, "item.collar.red", 80),
    item("collar_02", Collar, "item.collar.blue", 80),
    item("collar_03", Collar, "item.collar.bow", 150),
    item("collar_04", Collar, "item.collar.bell", 120),
    item("collar_05", Collar, "item.collar.bandana", 100),
    rare(item("collar_06", Collar, "item.collar.diamond", 350)),
    item("collar_07", Collar, "item.collar.rainbow", 300),
    rare(item("collar_08", Collar, "item.collar.gold", 450)),
    // Floors
    default_item(item("floor_01", Floor, "item.floor.wood", 0)),
    item("floor_02", Floor, "item.floor.carpet", 150),
    item("floor_03", Floor, "item.floor.grass", 200),
    item("floor_04", Floor, "item.floor.marble", 300),
    rare(item("floor_05", Floor, "item.floor.cloud", 400)),
    // Walls
    default_item(item("wall_01", Wall, "item.wall.beige", 0)),
    item("wall_02", Wall, "item.wall.blue", 100),
    item("wall_03", Wall, "item.wall.pink", 100),
    item("wall_04", Wall, "item.wall.forest", 250),
    rare(item("wall_05", Wall, "item.wall.space", 350)),
    // Beds
    default_item(item("bed_01", Bed, "item.bed.simple", 0)),
    item("bed_02", Bed, "item.bed.pillow", 200),
    item("bed_03", Bed, "item.bed.castle", 350),
    rare(item("bed_04", Bed, "item.bed.cloud", 500)),
    // Toys
    default_item(item("toy_01", Toy, "item.toy.ball", 0)),
    with_effect(
        item("toy_02", Toy, "item.toy.tennis", 100),
        ItemEffect::PlayBonus(0.05),
    ),
    item("toy_03", Toy, "item.toy.bone", 150),
    with_effect(
        item("toy_04", Toy, "item.toy.teddy", 200),
        ItemEffect::HappinessBonus(0.03),
    ),
    with_effect(
        item("toy_05", Toy, "item.toy.frisbee", 250),
        ItemEffect::PlayBonus(0.1),
    ),
];

pub fn item_by_id(id: &str) -> Option<&'static Item> {
    ITEMS.iter().find(|i| i.id == id)
}

pub fn items_in_category(category: ItemCategory) -> impl Iterator<Item = &'static Item> {
    ITEMS.iter().filter(move |i| i.category == category)
}

/// Items every new game starts with.
pub fn default_items() -> impl Iterator<Item = &'static Item> {
    ITEMS.iter().filter(|i| i.default)
}
