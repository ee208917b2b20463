//! Service layer for hotel-cli
//!
//! Business logic on top of the storage layer.

pub mod room;

pub use room::RoomService;
