//! PetPal Core - virtual pet simulation engine
//!
//! Owns the persistent [`GameState`](components::GameState) of one adopted
//! dog and every transition over it: stat decay over wall-clock time, care
//! actions and mini-game settlement, XP/bond/coin bookkeeping, daily and
//! weekly tasks, streaks, achievements, random events and tricks.
//!
//! # Architecture
//!
//! - **Components**: plain serializable data making up the aggregate
//! - **Systems**: free functions moving the aggregate between states
//! - **Engine**: single-writer handle tying systems to a clock and an RNG
//!
//! # Example
//!
//! ```rust,no_run
//! use petpal_core::prelude::*;
//! use petpal_logic::actions::ActionKind;
//!
//! let mut engine = PetEngine::new(EngineConfig::default(), SystemClock);
//! engine.onboard("dog_01", "Pamuk");
//!
//! // Call on start-up, on resume and once a minute.
//! let tick = engine.tick();
//! if let Some(report) = engine.perform_action(ActionKind::Feed) {
//!     println!("+{} coins, +{} xp", report.reward.coins, report.reward.xp);
//! }
//! # let _ = tick;
//! ```

pub mod clock;
pub mod components;
pub mod config;
pub mod engine;
pub mod persistence;
pub mod systems;

#[cfg(test)]
pub(crate) mod testing;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::{Clock, GameTime, ManualClock, SystemClock};
    pub use crate::components::*;
    pub use crate::config::EngineConfig;
    pub use crate::engine::{ActionReport, MiniGameReport, PetEngine, TickReport, TrickReport};
    pub use crate::persistence::SaveError;
}
