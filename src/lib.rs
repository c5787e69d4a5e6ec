//! # resistance-mcts
//!
//! A decision engine for The Resistance that reasons about hidden roles
//! by brute force: enumerate every spy assignment consistent with what
//! the agent knows, play each to completion, and pick the action that
//! wins the most of those futures.
//!
//! ## Design Principles
//!
//! 1. **One rules engine, used everywhere**: the same pure lookup and
//!    resolution functions drive the live match and every rollout inside
//!    the search.
//!
//! 2. **Policies are capabilities**: baseline-random, suspicion-scoring,
//!    and search-driven seats all implement one `Policy` trait and are
//!    selected at match construction.
//!
//! 3. **Deterministic under a seed**: every stochastic choice draws from
//!    a forkable seeded RNG, so matches and searches replay exactly.
//!
//! ## Architecture
//!
//! - **Hypothesis enumeration over inference**: the evaluator weighs
//!   every hidden-spy assignment equally rather than maintaining a
//!   posterior; precision comes from exhausting the space, not modeling
//!   behavior.
//!
//! - **Arena tree**: decision-state and action nodes live in a flat
//!   vector with index links; one fresh tree per real decision.
//!
//! ## Modules
//!
//! - `core`: seats, deterministic RNG, errors
//! - `rules`: rule tables, vote tally, mission resolution, win condition
//! - `policy`: the `Policy` capability and its three implementations
//! - `game`: live match orchestration and checkpointed rollouts
//! - `mcts`: the search tree and hypothesis evaluator

pub mod core;
pub mod game;
pub mod mcts;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Error, GameRng, Result, Seat, SeatMap, SeatSet};

pub use crate::rules::{
    match_outcome, resolve_mission, sabotages_required, spy_count, tally_vote, team_size,
    MAX_PLAYERS, MAX_PROPOSALS, MIN_PLAYERS, MISSIONS_TO_LOSE, MISSION_ROUNDS,
};

pub use crate::policy::{Policy, RandomPolicy, SearchPolicy, SuspicionPolicy};

pub use crate::game::{Match, MatchOutcome, Resume, Rollout};

pub use crate::mcts::{
    ActionChoice, DecisionContext, DecisionState, ExactEnumeration, HypothesisStrategy, MatchView,
    SampledHypotheses, Search, SearchConfig, SearchStats, SearchTree,
};
