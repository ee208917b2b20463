//! Configuration module for hotel-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Operator settings persistence

pub mod paths;
pub mod settings;

pub use paths::HotelPaths;
pub use settings::Settings;
