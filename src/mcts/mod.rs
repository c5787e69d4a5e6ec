//! Monte Carlo tree search over hidden-role decisions.
//!
//! ## Overview
//!
//! One independent search runs per real decision (propose, vote, or
//! mission). The tree is an arena of decision-state and action nodes;
//! candidate actions are scored by the hypothesis evaluator, which plays
//! every possible hidden-spy assignment to completion and averages the
//! outcomes. Selection covers every action once before UCB1 arbitrates,
//! and the final answer is the action with the highest raw win total.
//!
//! ## Usage
//!
//! ```
//! use resistance_mcts::core::Seat;
//! use resistance_mcts::mcts::{
//!     DecisionContext, DecisionState, ExactEnumeration, MatchView, Search, SearchConfig,
//! };
//!
//! let root = DecisionState {
//!     agent_is_spy: false,
//!     spy_count: 2,
//!     candidates: Seat::all(5).collect(),
//!     context: DecisionContext::Propose { team_size: 2 },
//! };
//! let view = MatchView {
//!     player_count: 5,
//!     seat: Seat::new(0),
//!     rounds_completed: 0,
//!     missions_failed: 0,
//! };
//!
//! let mut search = Search::new(SearchConfig::default());
//! let choice = search.run(root, &view, &ExactEnumeration).unwrap();
//! println!("best action: {:?}", choice);
//! ```

mod combinations;
pub mod config;
pub mod evaluate;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::SearchConfig;
pub use evaluate::{
    EvalRequest, Evaluation, ExactEnumeration, HypothesisStrategy, MatchView, SampledHypotheses,
};
pub use node::{ActionChoice, DecisionContext, DecisionState, NodeId, NodeKind, Phase, SearchNode};
pub use search::Search;
pub use stats::SearchStats;
pub use tree::SearchTree;
