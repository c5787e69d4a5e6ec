//! Per-decision search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected while deciding one action.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed (may stop short of the budget on deadline).
    pub iterations: u32,

    /// Full-game rollouts performed across all hypothesis evaluations.
    pub rollouts: u32,

    /// Time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rollouts per second.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
