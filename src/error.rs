//! Custom error types for hotel-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for hotel-cli operations
#[derive(Error, Debug)]
pub enum HotelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A room with this number is already registered
    #[error("Room already exists: {0}")]
    DuplicateKey(String),

    /// The nightly rate could not be understood
    #[error("Invalid input! Please enter a valid number for the price: '{0}'")]
    InvalidRate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Room is already occupied
    #[error("Room {room} is already allocated to {guest}")]
    AlreadyAllocated { room: String, guest: String },

    /// Room is already free
    #[error("Room {0} is already free")]
    AlreadyFree(String),

    /// The snapshot file could not be opened for writing
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Backup rotation failed partway
    #[error("Backup error: {0}")]
    Backup(String),
}

impl HotelError {
    /// Create a "not found" error for rooms
    pub fn room_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Room",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for files
    pub fn file_not_found(path: &std::path::Path) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: path.display().to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidRate(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for HotelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HotelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for hotel-cli operations
pub type HotelResult<T> = Result<T, HotelError>;
