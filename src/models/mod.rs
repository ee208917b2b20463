//! Core data models for hotel-cli
//!
//! Rooms and their nightly rates.

pub mod rate;
pub mod room;

pub use rate::{Rate, RateParseError};
pub use room::Room;
