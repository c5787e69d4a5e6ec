//! Per-decision tree search.
//!
//! One independent search runs for every real decision: build the root
//! and its action children, then repeat select → evaluate →
//! backpropagate for the configured budget. Selection favors unvisited
//! actions (picked uniformly at random) until every action has been
//! evaluated once; only then does UCB1 arbitrate. The final answer is the
//! action with the highest raw win total, deliberately favoring
//! well-sampled actions over lucky rarely-tried ones.

use std::time::Instant;

use crate::core::{GameRng, Result};
use crate::game::Resume;

use super::config::SearchConfig;
use super::evaluate::{EvalRequest, HypothesisStrategy, MatchView};
use super::node::{ActionChoice, DecisionContext, DecisionState, NodeId, NodeKind};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Map a root decision context and one of its candidate actions to the
/// rollout resumption that exercises that action.
fn resume_for(context: &DecisionContext, choice: &ActionChoice) -> Resume {
    match (context, choice) {
        (DecisionContext::Propose { .. }, ActionChoice::Team(team)) => Resume::Propose {
            team: team.clone(),
        },
        (DecisionContext::Vote { team, proposer }, ActionChoice::Vote(ballot)) => Resume::Vote {
            team: team.clone(),
            proposer: *proposer,
            ballot: *ballot,
        },
        (DecisionContext::Mission { team, proposer }, ActionChoice::Sabotage(sabotage)) => {
            Resume::Mission {
                team: team.clone(),
                proposer: *proposer,
                sabotage: *sabotage,
            }
        }
        _ => unreachable!("action choice generated for a different phase"),
    }
}

/// Search context for one decision.
pub struct Search {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
    tree: Option<SearchTree>,
}

impl Search {
    /// Create a search seeded from its configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a search drawing from an existing RNG stream.
    #[must_use]
    pub fn with_rng(config: SearchConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            stats: SearchStats::default(),
            tree: None,
        }
    }

    /// Run the search for one decision and return the best action.
    pub fn run(
        &mut self,
        root: DecisionState,
        view: &MatchView,
        strategy: &dyn HypothesisStrategy,
    ) -> Result<ActionChoice> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = SearchTree::new(root)?;

        // A single candidate action is no choice at all.
        if tree.children(tree.root()).len() == 1 {
            let choice = action_of(&tree, tree.children(tree.root())[0]);
            self.tree = Some(tree);
            return Ok(choice);
        }

        for _ in 0..self.config.iterations {
            if let Some(deadline) = self.config.deadline {
                if start.elapsed() >= deadline {
                    break;
                }
            }

            let selected = select_child(&tree, &mut self.rng, self.config.exploration_constant);

            let evaluation = {
                let NodeKind::Decision(state) = &tree.get(tree.root()).kind else {
                    unreachable!("root is a decision node");
                };
                let request = EvalRequest {
                    player_count: view.player_count,
                    seat: view.seat,
                    agent_is_spy: state.agent_is_spy,
                    spy_count: state.spy_count,
                    candidates: &state.candidates,
                    round: view.rounds_completed,
                    missions_failed: view.missions_failed,
                    resume: resume_for(&state.context, &action_of(&tree, selected)),
                };
                strategy.evaluate(&request, &mut self.rng)?
            };

            backpropagate(&mut tree, selected, evaluation.value);
            self.stats.iterations += 1;
            self.stats.rollouts += evaluation.rollouts;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        // Highest raw win total, not win rate: more-visited actions are
        // trusted over lucky rarely-tried ones. Ties keep the first.
        let mut best = tree.children(tree.root())[0];
        for &child in &tree.children(tree.root())[1..] {
            if tree.get(child).wins > tree.get(best).wins {
                best = child;
            }
        }
        let choice = action_of(&tree, best);
        self.tree = Some(tree);
        Ok(choice)
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The tree from the most recent decision, if one was built.
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }
}

fn action_of(tree: &SearchTree, id: NodeId) -> ActionChoice {
    match &tree.get(id).kind {
        NodeKind::Action(choice) => choice.clone(),
        NodeKind::Decision(_) => unreachable!("root children are action nodes"),
    }
}

/// Pick the child to evaluate this iteration: an unvisited one uniformly
/// at random if any exist, else the UCB1 maximizer.
fn select_child(tree: &SearchTree, rng: &mut GameRng, exploration: f64) -> NodeId {
    let children = tree.children(tree.root());

    let unvisited: Vec<NodeId> = children
        .iter()
        .copied()
        .filter(|&c| tree.get(c).visits == 0)
        .collect();
    if let Some(&id) = rng.choose(&unvisited) {
        return id;
    }

    let mut best = children[0];
    let mut best_score = uct_value(tree, best, exploration);
    for &child in &children[1..] {
        let score = uct_value(tree, child, exploration);
        if score > best_score {
            best = child;
            best_score = score;
        }
    }
    best
}

/// UCB1 score: exploitation plus exploration-weighted parent-visit log
/// ratio. Unvisited nodes, and parentless ones, are maximally
/// explorable.
fn uct_value(tree: &SearchTree, id: NodeId, exploration: f64) -> f64 {
    let node = tree.get(id);
    if node.visits == 0 || node.parent.is_none() {
        return f64::INFINITY;
    }

    let parent_visits = tree.get(node.parent).visits.max(1);
    let exploitation = node.wins / f64::from(node.visits);
    let ratio = (f64::from(parent_visits)).ln() / f64::from(node.visits);
    exploitation + exploration * ratio.sqrt()
}

/// Add the evaluation value and one visit to the node and every ancestor.
fn backpropagate(tree: &mut SearchTree, id: NodeId, value: f64) {
    let mut current = id;
    while !current.is_none() {
        let node = tree.get_mut(current);
        node.wins += value;
        node.visits += 1;
        current = node.parent;
    }
}
