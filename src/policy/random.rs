//! Baseline stochastic policy.
//!
//! The policy every rollout seat runs: uniformly random teams, coin-flip
//! ballots, a fixed sabotage rate. No side information beyond what the
//! notifications carry, and it ignores those entirely.

use crate::core::{GameRng, Result, Seat, SeatMap, SeatSet};

use super::Policy;

/// Probability that a baseline seat approves any proposal.
const APPROVAL_RATE: f64 = 0.5;

/// Probability that a baseline spy sabotages an approved mission.
const SABOTAGE_RATE: f64 = 0.3;

/// Uniformly random seat: the rollout baseline and a usable live opponent.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: GameRng,
    player_count: usize,
    seat: Seat,
    spies: Vec<Seat>,
}

impl RandomPolicy {
    /// Create a policy with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a policy from an existing RNG stream (used by rollouts to
    /// keep every simulated seat deterministic under one seed).
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            rng,
            player_count: 0,
            seat: Seat::new(0),
            spies: Vec::new(),
        }
    }

    fn is_spy(&self) -> bool {
        self.spies.contains(&self.seat)
    }
}

impl Policy for RandomPolicy {
    fn new_match(&mut self, player_count: usize, seat: Seat, spies: &[Seat]) {
        self.player_count = player_count;
        self.seat = seat;
        self.spies = spies.to_vec();
    }

    fn propose(&mut self, team_size: usize, _sabotages_required: usize) -> Result<SeatSet> {
        let mut pool: Vec<Seat> = Seat::all(self.player_count).collect();
        self.rng.shuffle(&mut pool);
        Ok(pool.into_iter().take(team_size).collect())
    }

    fn vote(&mut self, _team: &[Seat], _proposer: Seat) -> Result<bool> {
        Ok(self.rng.gen_bool(APPROVAL_RATE))
    }

    fn sabotage(&mut self, _team: &[Seat], _proposer: Seat) -> Result<bool> {
        if self.is_spy() {
            Ok(self.rng.gen_bool(SABOTAGE_RATE))
        } else {
            Ok(false)
        }
    }

    fn vote_outcome(&mut self, _team: &[Seat], _proposer: Seat, _ballots: &SeatMap<bool>) {}

    fn mission_outcome(&mut self, _team: &[Seat], _proposer: Seat, _sabotages: usize, _success: bool) {
    }

    fn round_outcome(&mut self, _rounds_completed: usize, _missions_failed: usize) {}

    fn game_outcome(&mut self, _spies_win: bool, _spies: &[Seat]) {}
}
