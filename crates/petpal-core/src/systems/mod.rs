//! Systems - transitions over the game state
//!
//! Each system is a set of free functions taking `&mut GameState` (plus the
//! time and RNG they need). Business-rule rejections return `None`, `false`
//! or a zero reward and leave the state untouched.

mod achievements;
mod actions;
mod decay;
mod events;
mod gifts;
mod ledger;
mod lifecycle;
mod shop;
mod streak;
mod tasks;
mod tricks;

pub use achievements::*;
pub use actions::*;
pub use decay::*;
pub use events::*;
pub use gifts::*;
pub use ledger::*;
pub use lifecycle::*;
pub use shop::*;
pub use streak::*;
pub use tasks::*;
pub use tricks::*;
