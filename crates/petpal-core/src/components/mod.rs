//! State definitions for the saved game.
//!
//! Everything here is plain data owned by [`GameState`]. Behavior lives in
//! [`crate::systems`].

mod game;
mod inventory;
mod pet;
mod records;
mod schedule;
mod settings;

pub use game::*;
pub use inventory::*;
pub use pet::*;
pub use records::*;
pub use schedule::*;
pub use settings::*;
