//! Room model
//!
//! Represents a single hotel room and its allocation state.

use std::fmt;

use super::rate::Rate;

/// A hotel room
///
/// The room number and type are fixed at creation. Only the guest changes,
/// moving the room between free and occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Room number, unique within a registry
    pub number: String,

    /// Free-text room type (e.g., "Deluxe")
    pub room_type: String,

    /// Price per night
    pub rate: Rate,

    /// Guest currently occupying the room
    guest: Option<String>,
}

impl Room {
    /// Create a new, unallocated room
    pub fn new(number: impl Into<String>, room_type: impl Into<String>, rate: Rate) -> Self {
        Self {
            number: number.into(),
            room_type: room_type.into(),
            rate,
            guest: None,
        }
    }

    /// Whether a guest occupies the room
    pub fn is_allocated(&self) -> bool {
        self.guest.is_some()
    }

    /// The current guest, if any
    pub fn guest(&self) -> Option<&str> {
        self.guest.as_deref()
    }

    /// Move the room to occupied
    ///
    /// Returns the current guest unchanged if the room is already taken.
    pub fn allocate(&mut self, guest: impl Into<String>) -> Result<(), &str> {
        match self.guest {
            Some(ref current) => Err(current.as_str()),
            None => {
                self.guest = Some(guest.into());
                Ok(())
            }
        }
    }

    /// Move the room to free, returning the guest who held it
    pub fn deallocate(&mut self) -> Option<String> {
        self.guest.take()
    }

    /// The line written for this room in a snapshot block
    ///
    /// `Room 101 | Type: Deluxe | Price: 100 | Guest: Alice | Allocated: True`
    pub fn snapshot_line(&self) -> String {
        format!(
            "Room {} | Type: {} | Price: {} | Guest: {} | Allocated: {}",
            self.number,
            self.room_type,
            self.rate,
            self.guest.as_deref().unwrap_or(""),
            if self.is_allocated() { "True" } else { "False" },
        )
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} ({})", self.number, self.room_type)
    }
}
