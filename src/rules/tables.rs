//! Published rule tables for 5–10 player games.
//!
//! Invariant reference data, never mutated: team size and sabotage
//! threshold per (player count, round), spy count per player count.

use crate::core::{Error, Result};

/// Smallest supported table size.
pub const MIN_PLAYERS: usize = 5;

/// Largest supported table size.
pub const MAX_PLAYERS: usize = 10;

/// A match is five missions long.
pub const MISSION_ROUNDS: usize = 5;

/// A round allows at most five team proposals.
pub const MAX_PROPOSALS: usize = 5;

/// Spies win once this many missions have failed.
pub const MISSIONS_TO_LOSE: usize = 3;

/// Required team size per round, rows indexed by `player_count - 5`.
const TEAM_SIZES: [[usize; MISSION_ROUNDS]; 6] = [
    [2, 3, 2, 3, 3], // 5 players
    [2, 3, 4, 3, 4], // 6 players
    [2, 3, 3, 4, 4], // 7 players
    [3, 4, 4, 5, 5], // 8 players
    [3, 4, 4, 5, 5], // 9 players
    [3, 4, 4, 5, 5], // 10 players
];

/// Sabotages needed to fail the mission. The final mission of 7+-player
/// games tolerates a single sabotage.
const SABOTAGES_REQUIRED: [[usize; MISSION_ROUNDS]; 6] = [
    [1, 1, 1, 1, 1], // 5 players
    [1, 1, 1, 1, 1], // 6 players
    [1, 1, 1, 1, 2], // 7 players
    [1, 1, 1, 1, 2], // 8 players
    [1, 1, 1, 1, 2], // 9 players
    [1, 1, 1, 1, 2], // 10 players
];

/// Hidden spies per player count.
const SPY_COUNTS: [usize; 6] = [2, 2, 3, 3, 3, 4];

fn table_row(player_count: usize) -> Result<usize> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(Error::UnsupportedPlayerCount {
            players: player_count,
        });
    }
    Ok(player_count - MIN_PLAYERS)
}

fn round_column(round: usize) -> Result<usize> {
    if round >= MISSION_ROUNDS {
        return Err(Error::RoundOutOfRange { round });
    }
    Ok(round)
}

/// Team size required for `round` in a `player_count`-player game.
pub fn team_size(player_count: usize, round: usize) -> Result<usize> {
    Ok(TEAM_SIZES[table_row(player_count)?][round_column(round)?])
}

/// Sabotages required to fail the mission of `round`.
pub fn sabotages_required(player_count: usize, round: usize) -> Result<usize> {
    Ok(SABOTAGES_REQUIRED[table_row(player_count)?][round_column(round)?])
}

/// Number of hidden spies in a `player_count`-player game.
pub fn spy_count(player_count: usize) -> Result<usize> {
    Ok(SPY_COUNTS[table_row(player_count)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_size_spot_checks() {
        assert_eq!(team_size(5, 0).unwrap(), 2);
        assert_eq!(team_size(5, 2).unwrap(), 2);
        assert_eq!(team_size(6, 2).unwrap(), 4);
        assert_eq!(team_size(7, 4).unwrap(), 4);
        assert_eq!(team_size(8, 4).unwrap(), 5);
        assert_eq!(team_size(10, 0).unwrap(), 3);
    }

    #[test]
    fn test_sabotages_required_spot_checks() {
        assert_eq!(sabotages_required(5, 4).unwrap(), 1);
        assert_eq!(sabotages_required(7, 3).unwrap(), 1);
        assert_eq!(sabotages_required(7, 4).unwrap(), 2);
        assert_eq!(sabotages_required(10, 4).unwrap(), 2);
    }

    #[test]
    fn test_spy_counts() {
        assert_eq!(spy_count(5).unwrap(), 2);
        assert_eq!(spy_count(6).unwrap(), 2);
        assert_eq!(spy_count(7).unwrap(), 3);
        assert_eq!(spy_count(10).unwrap(), 4);
    }

    #[test]
    fn test_player_count_out_of_range() {
        assert!(matches!(
            team_size(4, 0),
            Err(Error::UnsupportedPlayerCount { players: 4 })
        ));
        assert!(matches!(
            spy_count(11),
            Err(Error::UnsupportedPlayerCount { players: 11 })
        ));
    }

    #[test]
    fn test_round_out_of_range() {
        assert!(matches!(
            team_size(5, 5),
            Err(Error::RoundOutOfRange { round: 5 })
        ));
        assert!(matches!(
            sabotages_required(7, 99),
            Err(Error::RoundOutOfRange { round: 99 })
        ));
    }

    #[test]
    fn test_team_size_never_exceeds_players() {
        for players in MIN_PLAYERS..=MAX_PLAYERS {
            for round in 0..MISSION_ROUNDS {
                assert!(team_size(players, round).unwrap() <= players);
            }
        }
    }
}
