//! In-memory room registry
//!
//! Rooms are keyed by number for lookup and iterate in the order they were
//! added. The registry lives for the process only; nothing reloads it.

use std::collections::HashMap;

use crate::models::Room;

/// Insertion-ordered collection of rooms keyed by room number
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
}

impl RoomRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a room number is registered
    pub fn contains(&self, number: &str) -> bool {
        self.index.contains_key(number)
    }

    /// Get a room by number
    pub fn get(&self, number: &str) -> Option<&Room> {
        self.index.get(number).map(|&i| &self.rooms[i])
    }

    /// Get a room by number for modification
    pub fn get_mut(&mut self, number: &str) -> Option<&mut Room> {
        match self.index.get(number) {
            Some(&i) => self.rooms.get_mut(i),
            None => None,
        }
    }

    /// Insert a room unless its number is taken
    ///
    /// Returns false and leaves the registry untouched on a duplicate.
    pub fn insert(&mut self, room: Room) -> bool {
        if self.index.contains_key(&room.number) {
            return false;
        }

        self.index.insert(room.number.clone(), self.rooms.len());
        self.rooms.push(room);
        true
    }

    /// Iterate over all rooms in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Iterate over occupied rooms in insertion order
    pub fn allocated(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_allocated())
    }

    /// Number of registered rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no rooms are registered
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
