//! Vote tallying, mission resolution, and the match win condition.
//!
//! Pure functions over the rule tables; used both by the live match and
//! inside every rollout.

use crate::core::{Result, SeatMap};

use super::tables::{sabotages_required, MISSIONS_TO_LOSE};

/// Tally a round of ballots. A proposal is approved iff strictly more
/// than half of all seats vote yes; ties fail.
#[must_use]
pub fn tally_vote(ballots: &SeatMap<bool>) -> bool {
    let yes = ballots.iter().filter(|(_, v)| **v).count();
    2 * yes > ballots.player_count()
}

/// Resolve a mission: succeeds iff the sabotage count falls short of the
/// round's threshold. The boundary is exclusive: exactly the required
/// number of sabotages fails the mission.
pub fn resolve_mission(sabotages: usize, player_count: usize, round: usize) -> Result<bool> {
    Ok(sabotages < sabotages_required(player_count, round)?)
}

/// Match win condition: spies win iff at least three missions have
/// failed; otherwise the resistance holds.
#[must_use]
pub fn match_outcome(missions_failed: usize) -> bool {
    missions_failed >= MISSIONS_TO_LOSE
}
