//! Core types: seats, deterministic RNG, errors.
//!
//! These are the game-agnostic building blocks every other module sits on.

pub mod error;
pub mod rng;
pub mod seat;

pub use error::{Error, Result};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap, SeatSet};
