//! Arena-based search tree.
//!
//! Nodes are held in a flat `Vec` and referenced by `NodeId` indices, so
//! the decision-state/action alternation needs no ownership cycles: the
//! single parent index is all backpropagation requires.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

use super::combinations::seat_combinations;
use super::node::{ActionChoice, DecisionContext, DecisionState, NodeId, NodeKind, SearchNode};

/// Arena-based out-tree over decision-state and action nodes.
///
/// Built fresh for every real decision and discarded with it; no state
/// crosses decisions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl SearchTree {
    /// Build a tree from a root decision state, generating its action
    /// children per the phase rule: every team combination for Propose,
    /// yes/no for Vote, comply (plus sabotage for spies) for Mission.
    pub fn new(root: DecisionState) -> Result<Self> {
        let mut tree = Self {
            nodes: Vec::with_capacity(64),
            root: NodeId::new(0),
        };
        tree.nodes.push(SearchNode::decision(NodeId::NONE, root));
        tree.generate_children(tree.root)?;
        Ok(tree)
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child IDs of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn generate_children(&mut self, id: NodeId) -> Result<()> {
        let choices: Vec<ActionChoice> = {
            let NodeKind::Decision(state) = &self.get(id).kind else {
                unreachable!("children are generated for decision nodes only");
            };
            match &state.context {
                DecisionContext::Propose { team_size } => {
                    seat_combinations(&state.candidates, *team_size)
                        .into_iter()
                        .map(ActionChoice::Team)
                        .collect()
                }
                DecisionContext::Vote { .. } => {
                    vec![ActionChoice::Vote(true), ActionChoice::Vote(false)]
                }
                DecisionContext::Mission { .. } => {
                    if state.agent_is_spy {
                        vec![ActionChoice::Sabotage(false), ActionChoice::Sabotage(true)]
                    } else {
                        vec![ActionChoice::Sabotage(false)]
                    }
                }
            }
        };

        if choices.is_empty() {
            // Only Propose can come up empty: a team larger than the
            // candidate pool. That is a configuration error, not a leaf.
            let NodeKind::Decision(state) = &self.get(id).kind else {
                unreachable!("children are generated for decision nodes only");
            };
            let team_size = match &state.context {
                DecisionContext::Propose { team_size } => *team_size,
                _ => 0,
            };
            return Err(Error::NoCandidateActions {
                candidates: state.candidates.len(),
                team_size,
            });
        }

        for choice in choices {
            let child = self.alloc(SearchNode::action(id, choice));
            self.get_mut(id).children.push(child);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;
    use smallvec::smallvec;

    fn propose_state(players: usize, team_size: usize) -> DecisionState {
        DecisionState {
            agent_is_spy: false,
            spy_count: 2,
            candidates: Seat::all(players).collect(),
            context: DecisionContext::Propose { team_size },
        }
    }

    #[test]
    fn test_propose_children_are_combinations() {
        let tree = SearchTree::new(propose_state(5, 2)).unwrap();
        assert_eq!(tree.children(tree.root()).len(), 10);
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn test_vote_children() {
        let state = DecisionState {
            agent_is_spy: false,
            spy_count: 2,
            candidates: Seat::all(5).collect(),
            context: DecisionContext::Vote {
                team: smallvec![Seat::new(0), Seat::new(1)],
                proposer: Seat::new(0),
            },
        };
        let tree = SearchTree::new(state).unwrap();

        let kinds: Vec<_> = tree
            .children(tree.root())
            .iter()
            .map(|&c| tree.get(c).kind.clone())
            .collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(kinds[0], NodeKind::Action(ActionChoice::Vote(true))));
        assert!(matches!(kinds[1], NodeKind::Action(ActionChoice::Vote(false))));
    }

    #[test]
    fn test_mission_children_depend_on_role() {
        let mission = DecisionContext::Mission {
            team: smallvec![Seat::new(0), Seat::new(1)],
            proposer: Seat::new(0),
        };

        let honest = DecisionState {
            agent_is_spy: false,
            spy_count: 2,
            candidates: Seat::all(5).collect(),
            context: mission.clone(),
        };
        let tree = SearchTree::new(honest).unwrap();
        assert_eq!(tree.children(tree.root()).len(), 1);

        let spy = DecisionState {
            agent_is_spy: true,
            spy_count: 2,
            candidates: Seat::all(5).collect(),
            context: mission,
        };
        let tree = SearchTree::new(spy).unwrap();
        assert_eq!(tree.children(tree.root()).len(), 2);
    }

    #[test]
    fn test_children_link_back_to_parent() {
        let tree = SearchTree::new(propose_state(5, 2)).unwrap();

        for &child in tree.children(tree.root()) {
            assert_eq!(tree.get(child).parent, tree.root());
        }
    }

    #[test]
    fn test_oversized_team_is_an_error() {
        assert!(matches!(
            SearchTree::new(propose_state(5, 6)),
            Err(Error::NoCandidateActions {
                candidates: 5,
                team_size: 6
            })
        ));
    }
}
