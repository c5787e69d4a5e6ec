//! Shared round loop for live matches and rollouts.
//!
//! One round: the leader proposes, every seat votes, an approved team
//! runs its mission; a rejected proposal passes leadership on, and five
//! rejections fail the round outright. Leadership advances once per
//! proposal consumed, so it carries correctly across rounds.

use crate::core::{Error, Result, Seat, SeatMap};
use crate::policy::Policy;
use crate::rules::{
    resolve_mission, sabotages_required, tally_vote, team_size, MAX_PROPOSALS, MISSIONS_TO_LOSE,
    MISSION_ROUNDS,
};

use super::rollout::Resume;

/// Seat after `seat`, wrapping at the table size.
fn next_seat(seat: Seat, player_count: usize) -> Seat {
    Seat::new(((seat.index() + 1) % player_count) as u8)
}

/// Check a proposal against the invariants every team must satisfy:
/// exactly `expected` members, all distinct, all seated.
fn check_team(team: &[Seat], expected: usize, player_count: usize) -> Result<()> {
    if team.len() != expected {
        return Err(Error::MalformedTeam {
            reason: format!("{} members, expected {expected}", team.len()),
        });
    }
    let mut seen = [false; 256];
    for seat in team {
        if seat.index() >= player_count {
            return Err(Error::MalformedTeam {
                reason: format!("{seat} out of range for {player_count} players"),
            });
        }
        if seen[seat.index()] {
            return Err(Error::MalformedTeam {
                reason: format!("duplicate {seat}"),
            });
        }
        seen[seat.index()] = true;
    }
    Ok(())
}

/// Run an approved mission: poll each spy on the team (one forced
/// decision at most), resolve, and notify every seat.
fn run_mission(
    seats: &mut [Box<dyn Policy>],
    spies: &[Seat],
    team: &[Seat],
    proposer: Seat,
    round: usize,
    forced_sabotage: Option<(Seat, bool)>,
) -> Result<bool> {
    let player_count = seats.len();
    let mut sabotages = 0;

    for member in team {
        if !spies.contains(member) {
            continue;
        }
        let betrayed = match forced_sabotage {
            Some((agent, decision)) if agent == *member => decision,
            _ => seats[member.index()].sabotage(team, proposer)?,
        };
        if betrayed {
            sabotages += 1;
        }
    }

    let success = resolve_mission(sabotages, player_count, round)?;
    for seat in seats.iter_mut() {
        seat.mission_outcome(team, proposer, sabotages, success);
    }
    Ok(success)
}

/// Play a single round to its mission (or to five rejected proposals).
///
/// Returns whether the round's mission succeeded. `forced` threads the
/// candidate action being evaluated into the round: a forced proposal
/// replaces the leader's first team, a forced ballot replaces the acting
/// seat's vote on the pending team, and a forced sabotage decision
/// resumes directly at an approved mission.
fn play_round(
    seats: &mut [Box<dyn Policy>],
    spies: &[Seat],
    round: usize,
    leader: &mut Seat,
    forced: Option<(Seat, Resume)>,
) -> Result<bool> {
    let player_count = seats.len();
    let size = team_size(player_count, round)?;
    let required = sabotages_required(player_count, round)?;

    // A mission-phase resume skips proposal and voting entirely: the team
    // is already approved.
    let mut pending = match forced {
        Some((agent, Resume::Mission { team, proposer, sabotage })) => {
            check_team(&team, size, player_count)?;
            *leader = next_seat(proposer, player_count);
            return run_mission(seats, spies, &team, proposer, round, Some((agent, sabotage)));
        }
        Some((agent, Resume::Vote { team, proposer, ballot })) => {
            check_team(&team, size, player_count)?;
            *leader = next_seat(proposer, player_count);
            Some((team, proposer, Some((agent, ballot))))
        }
        Some((_, Resume::Propose { team })) => {
            check_team(&team, size, player_count)?;
            let proposer = *leader;
            *leader = next_seat(proposer, player_count);
            Some((team, proposer, None))
        }
        None => None,
    };

    for _ in 0..MAX_PROPOSALS {
        let (team, proposer, forced_ballot) = match pending.take() {
            Some(attempt) => attempt,
            None => {
                let proposer = *leader;
                let team = seats[proposer.index()].propose(size, required)?;
                check_team(&team, size, player_count)?;
                *leader = next_seat(proposer, player_count);
                (team, proposer, None)
            }
        };

        let mut ballots = SeatMap::with_value(player_count, false);
        for i in 0..player_count {
            let voter = Seat::new(i as u8);
            ballots[voter] = match forced_ballot {
                Some((agent, ballot)) if agent == voter => ballot,
                _ => seats[i].vote(&team, proposer)?,
            };
        }
        for seat in seats.iter_mut() {
            seat.vote_outcome(&team, proposer, &ballots);
        }

        if tally_vote(&ballots) {
            return run_mission(seats, spies, &team, proposer, round, None);
        }
    }

    // Five rejected proposals: the round is forfeit and counts as a
    // failed mission.
    Ok(false)
}

/// Drive rounds `start_round..5` to completion, stopping early once the
/// spies have their third failure. Notifies every seat of round progress.
pub(crate) fn play_rounds(
    seats: &mut [Box<dyn Policy>],
    spies: &[Seat],
    start_round: usize,
    missions_failed: &mut usize,
    leader: &mut Seat,
    forced: Option<(Seat, Resume)>,
) -> Result<()> {
    let mut forced = forced;

    for round in start_round..MISSION_ROUNDS {
        if *missions_failed >= MISSIONS_TO_LOSE {
            break;
        }

        let success = play_round(seats, spies, round, leader, forced.take())?;
        if !success {
            *missions_failed += 1;
        }

        for seat in seats.iter_mut() {
            seat.round_outcome(round + 1, *missions_failed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_seat_wraps() {
        assert_eq!(next_seat(Seat::new(0), 5), Seat::new(1));
        assert_eq!(next_seat(Seat::new(4), 5), Seat::new(0));
    }

    #[test]
    fn test_check_team_accepts_valid() {
        let team = [Seat::new(0), Seat::new(3), Seat::new(4)];
        assert!(check_team(&team, 3, 5).is_ok());
    }

    #[test]
    fn test_check_team_rejects_wrong_size() {
        let team = [Seat::new(0), Seat::new(1)];
        assert!(matches!(
            check_team(&team, 3, 5),
            Err(Error::MalformedTeam { .. })
        ));
    }

    #[test]
    fn test_check_team_rejects_duplicates() {
        let team = [Seat::new(2), Seat::new(2)];
        assert!(matches!(
            check_team(&team, 2, 5),
            Err(Error::MalformedTeam { .. })
        ));
    }

    #[test]
    fn test_check_team_rejects_out_of_range() {
        let team = [Seat::new(1), Seat::new(7)];
        assert!(matches!(
            check_team(&team, 2, 5),
            Err(Error::MalformedTeam { .. })
        ));
    }
}
