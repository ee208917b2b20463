//! Storage layer for hotel-cli
//!
//! Holds the in-memory room registry and the text files it is written to:
//! the append-only allocation snapshot and the JSON settings file helpers.

pub mod file_io;
pub mod rooms;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use rooms::RoomRegistry;
pub use snapshot::{snapshot_header, SnapshotStore};
