//! Game rules: lookup tables and resolution logic.
//!
//! Everything here is pure (no hidden state), so the same functions drive
//! the live match and every rollout inside the search.

pub mod resolve;
pub mod tables;

pub use resolve::{match_outcome, resolve_mission, tally_vote};
pub use tables::{
    sabotages_required, spy_count, team_size, MAX_PLAYERS, MAX_PROPOSALS, MIN_PLAYERS,
    MISSIONS_TO_LOSE, MISSION_ROUNDS,
};
