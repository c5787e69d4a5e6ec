//! Error types for the engine.
//!
//! Two classes of failure, both fatal to the current decision and never
//! defaulted:
//!
//! - **Invalid configuration**: unsupported player count or round index,
//!   malformed spy set, contradictory rollout checkpoint, empty hypothesis
//!   space, zero sample budget.
//! - **Inconsistent state**: a policy handed the engine something that
//!   violates an invariant (a malformed team proposal).

use thiserror::Error;

/// Main error type for the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unsupported player count {players} (supported: 5..=10)")]
    UnsupportedPlayerCount { players: usize },

    #[error("round index {round} out of range (0..5)")]
    RoundOutOfRange { round: usize },

    #[error("seat {seat} out of range for {players} players")]
    SeatOutOfRange { seat: usize, players: usize },

    #[error("spy set has {got} members, expected {expected}")]
    MalformedSpySet { expected: usize, got: usize },

    #[error(
        "contradictory checkpoint: round {round} with only {missions_failed} failed missions"
    )]
    ContradictoryCheckpoint { round: usize, missions_failed: usize },

    #[error("empty hypothesis space: {spies} spies among {candidates} candidates")]
    EmptyHypothesisSpace { candidates: usize, spies: usize },

    #[error("hypothesis sample budget is zero")]
    NoSampleBudget,

    #[error("no candidate actions: team of {team_size} from {candidates} live players")]
    NoCandidateActions { candidates: usize, team_size: usize },

    #[error("policy proposed a malformed team: {reason}")]
    MalformedTeam { reason: String },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedPlayerCount { players: 4 };
        assert_eq!(
            err.to_string(),
            "unsupported player count 4 (supported: 5..=10)"
        );

        let err = Error::MalformedSpySet { expected: 2, got: 3 };
        assert_eq!(err.to_string(), "spy set has 3 members, expected 2");
    }
}
