//! Hand-crafted suspicion-score policy.
//!
//! Tracks a per-seat suspicion score from public mission outcomes:
//! members of a failed mission gain a full share, an off-team proposer a
//! half share; successful missions refund the same amounts. Proposals
//! take the least-suspicious seats, and ballots compare the team's mean
//! suspicion against the table-wide total. Spies ignore the bookkeeping:
//! they approve everything and always sabotage.

use crate::core::{GameRng, Result, Seat, SeatMap, SeatSet};

use super::Policy;

/// Score adjustment for each member of a resolved mission.
const TEAM_SHARE: f64 = 1.0;

/// Score adjustment for a proposer who kept themselves off the team.
const PROPOSER_SHARE: f64 = 0.5;

/// Suspicion-tracking seat.
#[derive(Debug)]
pub struct SuspicionPolicy {
    rng: GameRng,
    player_count: usize,
    seat: Seat,
    spies: Vec<Seat>,
    suspicion: SeatMap<f64>,
}

impl SuspicionPolicy {
    /// Create a policy with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            player_count: 0,
            seat: Seat::new(0),
            spies: Vec::new(),
            suspicion: SeatMap::with_value(1, 0.0),
        }
    }

    fn is_spy(&self) -> bool {
        self.spies.contains(&self.seat)
    }

    /// Seats ordered from least to most suspicious, index as tiebreak.
    fn least_suspicious(&self, count: usize) -> SeatSet {
        let mut order: Vec<Seat> = Seat::all(self.player_count).collect();
        order.sort_by(|a, b| {
            self.suspicion[*a]
                .partial_cmp(&self.suspicion[*b])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index().cmp(&b.index()))
        });
        order.into_iter().take(count).collect()
    }
}

impl Policy for SuspicionPolicy {
    fn new_match(&mut self, player_count: usize, seat: Seat, spies: &[Seat]) {
        self.player_count = player_count;
        self.seat = seat;
        self.spies = spies.to_vec();

        self.suspicion = if spies.is_empty() {
            // Everyone starts equally suspect except ourselves.
            SeatMap::new(player_count, |s| if s == seat { 0.0 } else { 1.0 })
        } else {
            SeatMap::new(player_count, |s| {
                if spies.contains(&s) {
                    100.0
                } else {
                    0.0
                }
            })
        };
    }

    fn propose(&mut self, team_size: usize, _sabotages_required: usize) -> Result<SeatSet> {
        if self.is_spy() {
            // A spy has nothing to gain from a "clean" team; blend in with
            // a uniformly random proposal.
            let mut pool: Vec<Seat> = Seat::all(self.player_count).collect();
            self.rng.shuffle(&mut pool);
            return Ok(pool.into_iter().take(team_size).collect());
        }

        Ok(self.least_suspicious(team_size))
    }

    fn vote(&mut self, team: &[Seat], _proposer: Seat) -> Result<bool> {
        if self.is_spy() {
            return Ok(true);
        }

        let team_total: f64 = team.iter().map(|s| self.suspicion[*s]).sum();
        let mean = team_total / team.len() as f64;
        let table_total: f64 = self.suspicion.iter().map(|(_, v)| *v).sum();
        Ok(mean < table_total * 0.5)
    }

    fn sabotage(&mut self, _team: &[Seat], _proposer: Seat) -> Result<bool> {
        Ok(self.is_spy())
    }

    fn vote_outcome(&mut self, _team: &[Seat], _proposer: Seat, _ballots: &SeatMap<bool>) {}

    fn mission_outcome(&mut self, team: &[Seat], proposer: Seat, _sabotages: usize, success: bool) {
        let sign = if success { -1.0 } else { 1.0 };

        for member in team {
            self.suspicion[*member] += sign * TEAM_SHARE;
        }
        if !team.contains(&proposer) {
            self.suspicion[proposer] += sign * PROPOSER_SHARE;
        }
    }

    fn round_outcome(&mut self, _rounds_completed: usize, _missions_failed: usize) {}

    fn game_outcome(&mut self, _spies_win: bool, _spies: &[Seat]) {}
}
