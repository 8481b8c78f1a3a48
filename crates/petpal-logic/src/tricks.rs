//! Bond-gated tricks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrickId {
    Sit,
    Paw,
    Roll,
    Bark,
    Spin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickDef {
    pub id: TrickId,
    pub name_key: &'static str,
    pub required_bond: u32,
    pub xp: u64,
    pub coins: u64,
}

pub const TRICKS: [TrickDef; 5] = [
    TrickDef { id: TrickId::Sit, name_key: "tricks.sit", required_bond: 0, xp: 5, coins: 2 },
    TrickDef { id: TrickId::Paw, name_key: "tricks.paw", required_bond: 20, xp: 10, coins: 5 },
    TrickDef { id: TrickId::Roll, name_key: "tricks.roll", required_bond: 40, xp: 15, coins: 8 },
    TrickDef { id: TrickId::Bark, name_key: "tricks.bark", required_bond: 60, xp: 20, coins: 10 },
    TrickDef { id: TrickId::Spin, name_key: "tricks.spin", required_bond: 80, xp: 25, coins: 15 },
];

impl TrickId {
    pub fn def(self) -> &'static TrickDef {
        match self {
            TrickId::Sit => &TRICKS[0],
            TrickId::Paw => &TRICKS[1],
            TrickId::Roll => &TRICKS[2],
            TrickId::Bark => &TRICKS[3],
            TrickId::Spin => &TRICKS[4],
        }
    }
}

/// Tricks whose bond requirement is met.
pub fn available_tricks(bond: u32) -> impl Iterator<Item = &'static TrickDef> {
    TRICKS.iter().filter(move |t| t.required_bond <= bond)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_lookup_matches_table() {
        for t in &TRICKS {
            assert_eq!(t.id.def().id, t.id);
        }
    }

    #[test]
    fn test_availability_by_bond() {
        assert_eq!(available_tricks(0).count(), 1);
        assert_eq!(available_tricks(20).count(), 2);
        assert_eq!(available_tricks(79).count(), 4);
        assert_eq!(available_tricks(100).count(), 5);
    }
}
