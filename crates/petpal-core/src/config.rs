//! Engine configuration.

use petpal_logic::constants::{cooldowns, tasks};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Daily tasks generated per reset.
    pub daily_task_count: usize,
    /// Minimum gap between two uses of the same action.
    pub action_throttle_ms: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            daily_task_count: tasks::DAILY_TASK_COUNT,
            action_throttle_ms: cooldowns::ACTION_THROTTLE_MS,
        }
    }
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
