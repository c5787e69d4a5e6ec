//! Live match orchestration.
//!
//! A `Match` owns one policy per seat, draws the secret spy set, runs the
//! five rounds, and delivers every notification the policy capability
//! defines. `play` can be called repeatedly; each call draws a fresh spy
//! assignment, which is what the trial driver leans on.

use crate::core::{GameRng, Result, Seat};
use crate::policy::Policy;
use crate::rules::{match_outcome, spy_count};

use super::driver::play_rounds;

/// Result of a completed match.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    /// Did the spies force three failed missions?
    pub spies_win: bool,
    /// The revealed spy set, in seat order.
    pub spies: Vec<Seat>,
    /// Failed missions at completion (0..=5).
    pub missions_failed: usize,
}

/// A table of seated policies.
pub struct Match {
    seats: Vec<Box<dyn Policy>>,
    rng: GameRng,
}

impl Match {
    /// Seat the given policies. The seat count must be a supported player
    /// count (5–10).
    pub fn new(seats: Vec<Box<dyn Policy>>, seed: u64) -> Result<Self> {
        spy_count(seats.len())?;
        Ok(Self {
            seats,
            rng: GameRng::new(seed),
        })
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Play one match to completion.
    pub fn play(&mut self) -> Result<MatchOutcome> {
        let player_count = self.seats.len();
        let spy_total = spy_count(player_count)?;

        // Secret role draw.
        let mut order: Vec<Seat> = Seat::all(player_count).collect();
        self.rng.shuffle(&mut order);
        let mut spies: Vec<Seat> = order.into_iter().take(spy_total).collect();
        spies.sort_by_key(|s| s.index());

        for (i, seat) in self.seats.iter_mut().enumerate() {
            let who = Seat::new(i as u8);
            if spies.contains(&who) {
                seat.new_match(player_count, who, &spies);
            } else {
                seat.new_match(player_count, who, &[]);
            }
        }

        let mut leader = Seat::new(self.rng.gen_range_usize(0..player_count) as u8);
        let mut missions_failed = 0;
        play_rounds(
            &mut self.seats,
            &spies,
            0,
            &mut missions_failed,
            &mut leader,
            None,
        )?;

        let spies_win = match_outcome(missions_failed);
        for seat in self.seats.iter_mut() {
            seat.game_outcome(spies_win, &spies);
        }

        Ok(MatchOutcome {
            spies_win,
            spies,
            missions_failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RandomPolicy;

    fn random_table(player_count: usize, seed: u64) -> Match {
        let seats: Vec<Box<dyn Policy>> = (0..player_count)
            .map(|i| Box::new(RandomPolicy::new(seed + i as u64)) as Box<dyn Policy>)
            .collect();
        Match::new(seats, seed).unwrap()
    }

    #[test]
    fn test_rejects_unsupported_table_size() {
        let seats: Vec<Box<dyn Policy>> = (0..4)
            .map(|i| Box::new(RandomPolicy::new(i)) as Box<dyn Policy>)
            .collect();
        assert!(Match::new(seats, 42).is_err());
    }

    #[test]
    fn test_play_draws_correct_spy_count() {
        let mut game = random_table(7, 42);
        let outcome = game.play().unwrap();

        assert_eq!(outcome.spies.len(), 3);
        assert!(outcome.spies.iter().all(|s| s.index() < 7));
    }

    #[test]
    fn test_outcome_is_consistent() {
        let mut game = random_table(5, 42);

        for _ in 0..20 {
            let outcome = game.play().unwrap();
            assert!(outcome.missions_failed <= 5);
            assert_eq!(outcome.spies_win, outcome.missions_failed >= 3);
        }
    }

    #[test]
    fn test_replay_is_deterministic() {
        let mut a = random_table(5, 99);
        let mut b = random_table(5, 99);

        for _ in 0..5 {
            let oa = a.play().unwrap();
            let ob = b.play().unwrap();
            assert_eq!(oa.spies, ob.spies);
            assert_eq!(oa.missions_failed, ob.missions_failed);
            assert_eq!(oa.spies_win, ob.spies_win);
        }
    }
}
