//! The search-driven policy.
//!
//! A drop-in `Policy` implementation that answers every decision with an
//! independent tree search. It keeps only the public counters the
//! notifications carry (rounds completed, missions failed); hidden-spy
//! uncertainty is handled per decision by the hypothesis evaluator.

use crate::core::{GameRng, Result, Seat, SeatMap, SeatSet};
use crate::mcts::{
    ActionChoice, DecisionContext, DecisionState, ExactEnumeration, HypothesisStrategy, MatchView,
    Search, SearchConfig, SearchStats,
};
use crate::rules::spy_count;

use super::Policy;

/// Seat that decides by hypothesis-enumerating tree search.
pub struct SearchPolicy {
    config: SearchConfig,
    strategy: Box<dyn HypothesisStrategy>,
    rng: GameRng,
    player_count: usize,
    seat: Seat,
    spies: Vec<Seat>,
    rounds_completed: usize,
    missions_failed: usize,
    last_stats: SearchStats,
}

impl SearchPolicy {
    /// Create a search policy with exact hypothesis enumeration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            strategy: Box::new(ExactEnumeration),
            rng,
            player_count: 0,
            seat: Seat::new(0),
            spies: Vec::new(),
            rounds_completed: 0,
            missions_failed: 0,
            last_stats: SearchStats::default(),
        }
    }

    /// Replace the hypothesis strategy (e.g. `SampledHypotheses` for
    /// large tables).
    #[must_use]
    pub fn with_strategy<S: HypothesisStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    fn is_spy(&self) -> bool {
        self.spies.contains(&self.seat)
    }

    fn view(&self) -> MatchView {
        MatchView {
            player_count: self.player_count,
            seat: self.seat,
            rounds_completed: self.rounds_completed,
            missions_failed: self.missions_failed,
        }
    }

    /// Build a root for the current decision and search it. Every
    /// decision gets a fresh tree and a forked RNG stream.
    fn decide(&mut self, context: DecisionContext) -> Result<ActionChoice> {
        let root = DecisionState {
            agent_is_spy: self.is_spy(),
            spy_count: spy_count(self.player_count)?,
            candidates: Seat::all(self.player_count).collect(),
            context,
        };

        let mut search = Search::with_rng(self.config.clone(), self.rng.fork());
        let choice = search.run(root, &self.view(), self.strategy.as_ref())?;
        self.last_stats = search.stats().clone();
        Ok(choice)
    }
}

impl Policy for SearchPolicy {
    fn new_match(&mut self, player_count: usize, seat: Seat, spies: &[Seat]) {
        self.player_count = player_count;
        self.seat = seat;
        self.spies = spies.to_vec();
        self.rounds_completed = 0;
        self.missions_failed = 0;
    }

    fn propose(&mut self, team_size: usize, _sabotages_required: usize) -> Result<SeatSet> {
        match self.decide(DecisionContext::Propose { team_size })? {
            ActionChoice::Team(team) => Ok(team),
            _ => unreachable!("propose decision yields a team"),
        }
    }

    fn vote(&mut self, team: &[Seat], proposer: Seat) -> Result<bool> {
        let context = DecisionContext::Vote {
            team: team.iter().copied().collect(),
            proposer,
        };
        match self.decide(context)? {
            ActionChoice::Vote(ballot) => Ok(ballot),
            _ => unreachable!("vote decision yields a ballot"),
        }
    }

    fn sabotage(&mut self, team: &[Seat], proposer: Seat) -> Result<bool> {
        let context = DecisionContext::Mission {
            team: team.iter().copied().collect(),
            proposer,
        };
        match self.decide(context)? {
            ActionChoice::Sabotage(sabotage) => Ok(sabotage),
            _ => unreachable!("mission decision yields a sabotage choice"),
        }
    }

    fn vote_outcome(&mut self, _team: &[Seat], _proposer: Seat, _ballots: &SeatMap<bool>) {}

    fn mission_outcome(&mut self, _team: &[Seat], _proposer: Seat, _sabotages: usize, _success: bool) {
    }

    fn round_outcome(&mut self, rounds_completed: usize, missions_failed: usize) {
        self.rounds_completed = rounds_completed;
        self.missions_failed = missions_failed;
    }

    fn game_outcome(&mut self, _spies_win: bool, _spies: &[Seat]) {}
}
