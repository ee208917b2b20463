//! Room service
//!
//! Provides the business logic for room management: registering rooms and
//! moving them between free and occupied.

use crate::error::{HotelError, HotelResult};
use crate::models::{Rate, Room};
use crate::storage::RoomRegistry;

/// Service for room management
pub struct RoomService<'a> {
    registry: &'a mut RoomRegistry,
    strict_rates: bool,
}

impl<'a> RoomService<'a> {
    /// Create a new room service
    pub fn new(registry: &'a mut RoomRegistry) -> Self {
        Self {
            registry,
            strict_rates: false,
        }
    }

    /// Reject negative rates in `add_room`
    pub fn with_strict_rates(mut self, strict: bool) -> Self {
        self.strict_rates = strict;
        self
    }

    /// Register a new, free room
    ///
    /// Fails with `DuplicateKey` if the number is taken, leaving the existing
    /// room as it was, or `InvalidRate` if the rate text isn't a number.
    pub fn add_room(&mut self, number: &str, room_type: &str, rate: &str) -> HotelResult<Room> {
        if self.registry.contains(number) {
            return Err(HotelError::DuplicateKey(number.to_string()));
        }

        let rate = Rate::parse(rate).map_err(|e| {
            log::debug!("Rejected rate for room {}: {}", number, e);
            HotelError::InvalidRate(rate.trim().to_string())
        })?;

        if self.strict_rates && rate.is_negative() {
            return Err(HotelError::InvalidRate(rate.to_string()));
        }

        let room = Room::new(number, room_type, rate);
        self.registry.insert(room.clone());
        log::info!("Added {} at {}", room, room.rate);

        Ok(room)
    }

    /// Check whether a room number is registered
    pub fn exists(&self, number: &str) -> bool {
        self.registry.contains(number)
    }

    /// All rooms in the order they were added
    pub fn list_rooms(&self) -> Vec<&Room> {
        self.registry.iter().collect()
    }

    /// Occupied rooms in the order they were added
    pub fn list_allocated(&self) -> Vec<&Room> {
        self.registry.allocated().collect()
    }

    /// Look up a room that can take a guest
    ///
    /// Lets a front end reject the request before asking for a guest name.
    pub fn ensure_free(&self, number: &str) -> HotelResult<&Room> {
        let room = self
            .registry
            .get(number)
            .ok_or_else(|| HotelError::room_not_found(number))?;

        match room.guest() {
            Some(guest) => Err(HotelError::AlreadyAllocated {
                room: number.to_string(),
                guest: guest.to_string(),
            }),
            None => Ok(room),
        }
    }

    /// Give a free room to a guest
    pub fn allocate(&mut self, number: &str, guest: &str) -> HotelResult<()> {
        let guest = guest.trim();
        if guest.is_empty() {
            return Err(HotelError::Validation("Guest name cannot be empty".into()));
        }

        let room = self
            .registry
            .get_mut(number)
            .ok_or_else(|| HotelError::room_not_found(number))?;

        room.allocate(guest)
            .map_err(|current| HotelError::AlreadyAllocated {
                room: number.to_string(),
                guest: current.to_string(),
            })?;

        log::info!("Allocated {} to {}", room, guest);
        Ok(())
    }

    /// Free an occupied room, returning the guest who held it
    pub fn deallocate(&mut self, number: &str) -> HotelResult<String> {
        let room = self
            .registry
            .get_mut(number)
            .ok_or_else(|| HotelError::room_not_found(number))?;

        let guest = room
            .deallocate()
            .ok_or_else(|| HotelError::AlreadyFree(number.to_string()))?;

        log::info!("De-allocated {} from {}", room, guest);
        Ok(guest)
    }
}
