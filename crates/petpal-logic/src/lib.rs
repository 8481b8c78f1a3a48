//! Pure game rules for PetPal.
//!
//! This crate contains all game logic that is independent of storage, clocks
//! or randomness. Functions take plain data and return results, and the
//! reference tables are `const` data, making everything unit-testable and
//! usable from the engine, the headless harness, or any future frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`achievements`] | Achievement table and the metric each one watches |
//! | [`actions`] | Care actions and their stat/coin/XP/bond effects |
//! | [`breeds`] | Breed decay multipliers and play bonus |
//! | [`calendar`] | Week start and consecutive-day checks |
//! | [`constants`] | Limits, decay rates, initial values, cooldowns |
//! | [`events`] | Random event table, triggers and bond gates |
//! | [`gifts`] | Daily gift calendar and login-streak rewards |
//! | [`items`] | Shop catalog of wearables and room decor |
//! | [`minigames`] | Mini-game score settlement against base actions |
//! | [`mood`] | Pet mood derived from stats |
//! | [`progression`] | XP curve, level roll-over, bond tiers, age stages |
//! | [`seasonal`] | Seasonal theme windows |
//! | [`stats`] | The clamped five-stat vector and deltas |
//! | [`tasks`] | Daily/weekly task templates and progress routing |
//! | [`tricks`] | Bond-gated tricks |

pub mod achievements;
pub mod actions;
pub mod breeds;
pub mod calendar;
pub mod constants;
pub mod events;
pub mod gifts;
pub mod items;
pub mod minigames;
pub mod mood;
pub mod progression;
pub mod seasonal;
pub mod stats;
pub mod tasks;
pub mod tricks;
