//! Search tree nodes.
//!
//! The tree alternates decision-state nodes (a point of choice: propose,
//! vote, or mission) and action nodes (one candidate choice). Nodes live
//! in an arena and reference each other by index.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Seat, SeatSet};

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// The three decision phases, in the order a round visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The leader selects a team.
    Propose,
    /// Every seat casts a ballot on the proposed team.
    Vote,
    /// Each spy on an approved team privately decides to sabotage or not.
    Mission,
}

/// Phase-specific context of a decision point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DecisionContext {
    /// Choosing a team of `team_size` seats.
    Propose { team_size: usize },
    /// Voting on `team` put forward by `proposer`.
    Vote { team: SeatSet, proposer: Seat },
    /// Deciding sabotage on the approved `team`.
    Mission { team: SeatSet, proposer: Seat },
}

impl DecisionContext {
    /// The phase this context belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            DecisionContext::Propose { .. } => Phase::Propose,
            DecisionContext::Vote { .. } => Phase::Vote,
            DecisionContext::Mission { .. } => Phase::Mission,
        }
    }
}

/// One point of choice for the searching agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionState {
    /// Is the deciding seat a spy?
    pub agent_is_spy: bool,
    /// Spies hidden in this subgame.
    pub spy_count: usize,
    /// Seats still live in this subgame: the hidden-information space the
    /// evaluator enumerates over.
    pub candidates: Vec<Seat>,
    /// Phase-specific context.
    pub context: DecisionContext,
}

/// One candidate choice under a decision-state node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionChoice {
    /// Propose this team.
    Team(SeatSet),
    /// Cast this ballot.
    Vote(bool),
    /// Sabotage (or comply on) the mission.
    Sabotage(bool),
}

/// Node payload: a decision point or a candidate action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum NodeKind {
    Decision(DecisionState),
    Action(ActionChoice),
}

/// A node in the search tree.
///
/// `wins` is real-valued: each evaluation contributes an averaged value
/// in [0, 1] rather than a binary outcome, so `wins <= visits` always.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,
    /// Accumulated evaluation value.
    pub wins: f64,
    /// Evaluations that have passed through this node.
    pub visits: u32,
    /// Child nodes, in generation order.
    pub children: SmallVec<[NodeId; 8]>,
    /// Payload.
    pub kind: NodeKind,
}

impl SearchNode {
    /// Create a decision-state node.
    #[must_use]
    pub fn decision(parent: NodeId, state: DecisionState) -> Self {
        Self {
            parent,
            wins: 0.0,
            visits: 0,
            children: SmallVec::new(),
            kind: NodeKind::Decision(state),
        }
    }

    /// Create an action node.
    #[must_use]
    pub fn action(parent: NodeId, choice: ActionChoice) -> Self {
        Self {
            parent,
            wins: 0.0,
            visits: 0,
            children: SmallVec::new(),
            kind: NodeKind::Action(choice),
        }
    }
}
