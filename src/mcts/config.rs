//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Select/evaluate/backpropagate iterations per real decision.
    /// Larger budgets trade latency for decision quality.
    pub iterations: u32,

    /// UCB1 exploration constant (default: sqrt(2)).
    pub exploration_constant: f64,

    /// Random seed for rollouts and tie-breaking.
    /// Same seed produces deterministic decisions.
    pub seed: u64,

    /// Optional wall-clock budget per decision. Hypothesis enumeration
    /// grows combinatorially with player count; the deadline keeps a
    /// decision from stalling the enclosing match.
    pub deadline: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
            deadline: None,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom iteration budget.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a wall-clock deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.iterations, 10);
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.seed, 42);
        assert!(config.deadline.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_iterations(100)
            .with_seed(123)
            .with_deadline(Duration::from_millis(250));

        assert_eq!(config.iterations, 100);
        assert_eq!(config.seed, 123);
        assert_eq!(config.deadline, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.iterations, deserialized.iterations);
    }
}
