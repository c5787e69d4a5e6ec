//! Hypothesis-space evaluation of candidate actions.
//!
//! The acting agent does not know who the spies are. Instead of scoring a
//! candidate action with one noisy rollout, the evaluator averages over
//! the hidden-information space: every spy assignment consistent with the
//! node's live-player set is played to completion once, and the action's
//! value is the fraction of assignments under which the agent's side
//! wins. Every assignment is weighted equally; there is no posterior.
//!
//! Enumeration is pluggable: exact enumeration is the default and the
//! precision end of the tradeoff; `SampledHypotheses` trades exactness
//! for a fixed budget when the combination count grows too large.

use crate::core::{Error, GameRng, Result, Seat};
use crate::game::{Resume, Rollout};

use super::combinations::seat_combinations;

/// Public match counters the searching agent knows at decision time.
#[derive(Clone, Copy, Debug)]
pub struct MatchView {
    /// Seats in the match.
    pub player_count: usize,
    /// The acting agent's own seat.
    pub seat: Seat,
    /// Rounds completed so far.
    pub rounds_completed: usize,
    /// Missions failed so far.
    pub missions_failed: usize,
}

/// One evaluation request: a candidate action in its decision context.
#[derive(Clone, Debug)]
pub struct EvalRequest<'a> {
    /// Seats in the match.
    pub player_count: usize,
    /// The acting agent's own seat.
    pub seat: Seat,
    /// The agent's real allegiance (not part of any hypothesis).
    pub agent_is_spy: bool,
    /// Spies to place among the candidates.
    pub spy_count: usize,
    /// The live-player set to draw hypothetical spy sets from.
    pub candidates: &'a [Seat],
    /// Round the rollout resumes from.
    pub round: usize,
    /// Failed missions at the checkpoint.
    pub missions_failed: usize,
    /// The candidate action, threaded into the first rollout round.
    pub resume: Resume,
}

/// Outcome of evaluating one candidate action.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation {
    /// Estimated win probability for the acting side, in [0, 1].
    pub value: f64,
    /// Rollouts performed to produce it.
    pub rollouts: u32,
}

/// How the hidden-spy hypothesis space is traversed.
pub trait HypothesisStrategy: Send + Sync {
    /// Estimate the acting side's win probability for a candidate action.
    fn evaluate(&self, request: &EvalRequest<'_>, rng: &mut GameRng) -> Result<Evaluation>;
}

/// One rollout under one concrete spy hypothesis. The hypothesis counts
/// as a win iff the rollout's resistance outcome matches the side the
/// agent is actually on.
fn hypothesis_wins(request: &EvalRequest<'_>, spies: &[Seat], rng: &mut GameRng) -> Result<bool> {
    let rollout = Rollout::new(
        request.player_count,
        request.seat,
        spies,
        request.round,
        request.missions_failed,
    )?;
    let resistance_won = rollout.run(request.resume.clone(), &mut rng.fork())?;
    Ok(resistance_won != request.agent_is_spy)
}

/// Exhaustive enumeration: one rollout per possible spy set.
///
/// The default strategy. Cost is combinatorial in the candidate count,
/// but bounded at supported table sizes (10-choose-5 = 252 at worst).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactEnumeration;

impl HypothesisStrategy for ExactEnumeration {
    fn evaluate(&self, request: &EvalRequest<'_>, rng: &mut GameRng) -> Result<Evaluation> {
        let hypotheses = seat_combinations(request.candidates, request.spy_count);
        if hypotheses.is_empty() {
            return Err(Error::EmptyHypothesisSpace {
                candidates: request.candidates.len(),
                spies: request.spy_count,
            });
        }

        let mut wins = 0u32;
        for spies in &hypotheses {
            if hypothesis_wins(request, spies, rng)? {
                wins += 1;
            }
        }

        Ok(Evaluation {
            value: f64::from(wins) / hypotheses.len() as f64,
            rollouts: hypotheses.len() as u32,
        })
    }
}

/// Monte Carlo traversal: a fixed budget of uniformly drawn spy sets.
///
/// Trades the exact average for bounded cost at large player counts.
#[derive(Clone, Copy, Debug)]
pub struct SampledHypotheses {
    samples: u32,
}

impl SampledHypotheses {
    /// Sample `samples` spy sets per evaluation.
    #[must_use]
    pub fn new(samples: u32) -> Self {
        Self { samples }
    }
}

impl HypothesisStrategy for SampledHypotheses {
    fn evaluate(&self, request: &EvalRequest<'_>, rng: &mut GameRng) -> Result<Evaluation> {
        if self.samples == 0 {
            return Err(Error::NoSampleBudget);
        }
        if request.spy_count > request.candidates.len() {
            return Err(Error::EmptyHypothesisSpace {
                candidates: request.candidates.len(),
                spies: request.spy_count,
            });
        }

        let mut pool: Vec<Seat> = request.candidates.to_vec();
        let mut wins = 0u32;
        for _ in 0..self.samples {
            rng.shuffle(&mut pool);
            let spies = &pool[..request.spy_count];
            if hypothesis_wins(request, spies, rng)? {
                wins += 1;
            }
        }

        Ok(Evaluation {
            value: f64::from(wins) / f64::from(self.samples),
            rollouts: self.samples,
        })
    }
}
