//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat identifier. A match seats 5–10 players; seat indices are
//! 0-based and stable for the lifetime of a match.
//!
//! ## SeatMap
//!
//! Dense per-seat storage backed by `Vec` for O(1) access: ballots,
//! suspicion scores, anything with exactly one entry per seat.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a match with `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = Seat> {
        (0..player_count as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// A small owned set of seats: mission teams and spy sets.
///
/// Inline capacity 5 covers the largest team (5 seats in 8+-player games)
/// and the largest spy set (4 spies at 10 players).
pub type SeatSet = SmallVec<[Seat; 5]>;

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with exactly one entry per seat.
///
/// ## Example
///
/// ```
/// use resistance_mcts::core::{Seat, SeatMap};
///
/// let mut ballots: SeatMap<bool> = SeatMap::with_value(5, false);
/// ballots[Seat::new(2)] = true;
/// assert!(ballots[Seat::new(2)]);
/// assert!(!ballots[Seat::new(0)]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(Seat) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 seat");
        assert!(player_count <= 255, "At most 255 seats supported");

        let data = (0..player_count as u8).map(|i| factory(Seat(i))).collect();

        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's entry.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's entry.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (Seat(i as u8), v))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s3 = Seat::new(3);

        assert_eq!(s0.index(), 0);
        assert_eq!(s3.index(), 3);
        assert_eq!(format!("{}", s3), "seat 3");
    }

    #[test]
    fn test_seat_all() {
        let seats: Vec<_> = Seat::all(5).collect();
        assert_eq!(seats.len(), 5);
        assert_eq!(seats[0], Seat::new(0));
        assert_eq!(seats[4], Seat::new(4));
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<i32> = SeatMap::new(4, |s| s.index() as i32 * 10);

        assert_eq!(map[Seat::new(0)], 0);
        assert_eq!(map[Seat::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<f64> = SeatMap::with_value(3, 1.0);

        map[Seat::new(1)] += 0.5;

        assert_eq!(map[Seat::new(0)], 1.0);
        assert_eq!(map[Seat::new(1)], 1.5);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<bool> = SeatMap::new(3, |s| s.index() == 1);

        let yes: Vec<Seat> = map.iter().filter(|(_, v)| **v).map(|(s, _)| s).collect();
        assert_eq!(yes, vec![Seat::new(1)]);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<i32> = SeatMap::new(2, |s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<i32> = SeatMap::with_value(0, 0);
    }
}
