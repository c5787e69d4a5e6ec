//! Decision policies.
//!
//! One capability trait covers every seat: the baseline stochastic policy
//! used inside rollouts, the hand-crafted suspicion policy, and the
//! search-driven policy are all drop-in implementations selected at
//! match-construction time.

pub mod random;
pub mod search;
pub mod suspicion;

use crate::core::{Result, Seat, SeatMap, SeatSet};

/// A seat-scoped decision policy.
///
/// Decision methods (`propose`, `vote`, `sabotage`) return `Result` so a
/// failing policy aborts the enclosing match or rollout instead of
/// guessing. Notification methods are side-effect opportunities for
/// stateful policies and cannot fail.
///
/// ## Contract
///
/// - `new_match` is called once per match before any decision; `spies` is
///   the full spy set if this seat is a spy, empty otherwise.
/// - `propose` must return exactly `team_size` distinct seats.
/// - `sabotage` is only called for spies on an approved team.
pub trait Policy: Send {
    /// Start a new match.
    fn new_match(&mut self, player_count: usize, seat: Seat, spies: &[Seat]);

    /// Propose a team of `team_size` distinct seats.
    /// `sabotages_required` is the round's failure threshold.
    fn propose(&mut self, team_size: usize, sabotages_required: usize) -> Result<SeatSet>;

    /// Cast a ballot on a proposed team. `true` approves.
    fn vote(&mut self, team: &[Seat], proposer: Seat) -> Result<bool>;

    /// Decide whether to sabotage an approved mission. `true` sabotages.
    fn sabotage(&mut self, team: &[Seat], proposer: Seat) -> Result<bool>;

    /// Observe the full ballot record of a proposal.
    fn vote_outcome(&mut self, team: &[Seat], proposer: Seat, ballots: &SeatMap<bool>);

    /// Observe a resolved mission: how many sabotages, and whether it
    /// succeeded.
    fn mission_outcome(&mut self, team: &[Seat], proposer: Seat, sabotages: usize, success: bool);

    /// Observe end-of-round progress.
    fn round_outcome(&mut self, rounds_completed: usize, missions_failed: usize);

    /// Observe the end of the match and the revealed spy set.
    fn game_outcome(&mut self, spies_win: bool, spies: &[Seat]);
}

pub use random::RandomPolicy;
pub use search::SearchPolicy;
pub use suspicion::SuspicionPolicy;
