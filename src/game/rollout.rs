//! Checkpointed match simulation.
//!
//! A rollout replays the remainder of a match from an arbitrary mid-game
//! checkpoint under one concrete spy assignment, with every seat driven
//! by a baseline stochastic policy. The candidate action being evaluated
//! is threaded into the first round, so vote and mission decisions are
//! genuinely exercised by the simulation that scores them.

use crate::core::{Error, GameRng, Result, Seat, SeatSet};
use crate::policy::{Policy, RandomPolicy};
use crate::rules::{spy_count, MISSIONS_TO_LOSE, MISSION_ROUNDS};

use super::driver::play_rounds;

/// Where the rollout resumes, carrying the candidate action under
/// evaluation.
#[derive(Clone, Debug)]
pub enum Resume {
    /// The acting seat leads the round and proposes `team`.
    Propose { team: SeatSet },
    /// `team` is pending approval; the acting seat casts `ballot`, every
    /// other seat votes per its policy.
    Vote {
        team: SeatSet,
        proposer: Seat,
        ballot: bool,
    },
    /// `team` is already approved; the acting seat's sabotage decision is
    /// fixed, other spies on the team decide per their policy.
    Mission {
        team: SeatSet,
        proposer: Seat,
        sabotage: bool,
    },
}

/// A validated rollout checkpoint.
#[derive(Clone, Debug)]
pub struct Rollout {
    player_count: usize,
    seat: Seat,
    spies: Vec<Seat>,
    round: usize,
    missions_failed: usize,
}

impl Rollout {
    /// Validate and capture a checkpoint.
    ///
    /// Fails on a spy set whose size disagrees with the rule table, an
    /// out-of-range seat, or a checkpoint claiming five completed rounds
    /// while fewer than three missions have failed (the match would
    /// already be over with a resistance win, leaving nothing to simulate).
    pub fn new(
        player_count: usize,
        seat: Seat,
        spies: &[Seat],
        round: usize,
        missions_failed: usize,
    ) -> Result<Self> {
        let expected = spy_count(player_count)?;
        if spies.len() != expected {
            return Err(Error::MalformedSpySet {
                expected,
                got: spies.len(),
            });
        }
        if seat.index() >= player_count {
            return Err(Error::SeatOutOfRange {
                seat: seat.index(),
                players: player_count,
            });
        }
        for spy in spies {
            if spy.index() >= player_count {
                return Err(Error::SeatOutOfRange {
                    seat: spy.index(),
                    players: player_count,
                });
            }
        }
        let mut distinct: Vec<usize> = spies.iter().map(|s| s.index()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() != expected {
            return Err(Error::MalformedSpySet {
                expected,
                got: distinct.len(),
            });
        }
        if round >= MISSION_ROUNDS && missions_failed < MISSIONS_TO_LOSE {
            return Err(Error::ContradictoryCheckpoint {
                round,
                missions_failed,
            });
        }

        Ok(Self {
            player_count,
            seat,
            spies: spies.to_vec(),
            round,
            missions_failed,
        })
    }

    /// Play the remaining rounds with baseline stochastic seats.
    ///
    /// Returns `true` iff the resistance wins.
    pub fn run(&self, resume: Resume, rng: &mut GameRng) -> Result<bool> {
        self.run_with(resume, rng, |r| {
            Box::new(RandomPolicy::with_rng(r.fork())) as Box<dyn Policy>
        })
    }

    /// Play the remaining rounds with seats built by `make_seat`.
    ///
    /// The factory is called once per seat; each policy is then told the
    /// spy set it privately knows (the full set for spies, nothing for
    /// everyone else).
    pub fn run_with<F>(&self, resume: Resume, rng: &mut GameRng, mut make_seat: F) -> Result<bool>
    where
        F: FnMut(&mut GameRng) -> Box<dyn Policy>,
    {
        let mut seats: Vec<Box<dyn Policy>> = Vec::with_capacity(self.player_count);
        for _ in 0..self.player_count {
            seats.push(make_seat(rng));
        }
        for (i, seat) in seats.iter_mut().enumerate() {
            let who = Seat::new(i as u8);
            if self.spies.contains(&who) {
                seat.new_match(self.player_count, who, &self.spies);
            } else {
                seat.new_match(self.player_count, who, &[]);
            }
        }

        // Proposal resumption starts with the acting seat as leader; vote
        // and mission resumption derive leadership from the proposer.
        let mut leader = match &resume {
            Resume::Propose { .. } => self.seat,
            Resume::Vote { proposer, .. } | Resume::Mission { proposer, .. } => *proposer,
        };

        let mut missions_failed = self.missions_failed;
        play_rounds(
            &mut seats,
            &self.spies,
            self.round,
            &mut missions_failed,
            &mut leader,
            Some((self.seat, resume)),
        )?;

        Ok(missions_failed < MISSIONS_TO_LOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn spies5() -> Vec<Seat> {
        vec![Seat::new(1), Seat::new(3)]
    }

    #[test]
    fn test_rejects_wrong_spy_count() {
        let spies = [Seat::new(1)];
        assert!(matches!(
            Rollout::new(5, Seat::new(0), &spies, 0, 0),
            Err(Error::MalformedSpySet {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_rejects_duplicate_spies() {
        let spies = [Seat::new(1), Seat::new(1)];
        assert!(matches!(
            Rollout::new(5, Seat::new(0), &spies, 0, 0),
            Err(Error::MalformedSpySet { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_spy() {
        let spies = [Seat::new(1), Seat::new(9)];
        assert!(matches!(
            Rollout::new(5, Seat::new(0), &spies, 0, 0),
            Err(Error::SeatOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_contradictory_checkpoint() {
        assert!(matches!(
            Rollout::new(5, Seat::new(0), &spies5(), 5, 2),
            Err(Error::ContradictoryCheckpoint { .. })
        ));
    }

    #[test]
    fn test_finished_checkpoint_is_spy_win() {
        let rollout = Rollout::new(5, Seat::new(0), &spies5(), 5, 3).unwrap();
        let mut rng = GameRng::new(42);

        let resume = Resume::Propose {
            team: smallvec![Seat::new(0), Seat::new(2)],
        };
        assert!(!rollout.run(resume, &mut rng).unwrap());
    }

    #[test]
    fn test_run_completes_from_start() {
        let rollout = Rollout::new(5, Seat::new(0), &spies5(), 0, 0).unwrap();
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let resume = Resume::Propose {
                team: smallvec![Seat::new(0), Seat::new(2)],
            };
            // Either side may win; the rollout must simply terminate.
            let _ = rollout.run(resume, &mut rng.fork()).unwrap();
        }
    }

    #[test]
    fn test_run_completes_mid_game() {
        let rollout = Rollout::new(7, Seat::new(2), &[Seat::new(0), Seat::new(4), Seat::new(6)], 3, 2)
            .unwrap();
        let mut rng = GameRng::new(7);

        let resume = Resume::Vote {
            team: smallvec![Seat::new(1), Seat::new(2), Seat::new(3), Seat::new(5)],
            proposer: Seat::new(1),
            ballot: true,
        };
        let _ = rollout.run(resume, &mut rng).unwrap();
    }

    #[test]
    fn test_run_deterministic_given_seed() {
        let rollout = Rollout::new(5, Seat::new(0), &spies5(), 0, 0).unwrap();

        let outcome = |seed: u64| {
            let mut rng = GameRng::new(seed);
            let resume = Resume::Mission {
                team: smallvec![Seat::new(0), Seat::new(1)],
                proposer: Seat::new(0),
                sabotage: false,
            };
            rollout.run(resume, &mut rng).unwrap()
        };

        assert_eq!(outcome(123), outcome(123));
    }
}
