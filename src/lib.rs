//! hotel-cli - Menu-driven hotel room allocation manager
//!
//! This library provides the core functionality for the hotel-cli room desk:
//! an in-memory room registry with allocate/de-allocate transitions, an
//! append-only text snapshot of current allocations, and a backup rotation
//! that moves the snapshot into a dated backup log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Rooms and nightly rates
//! - `storage`: Room registry, snapshot file and file helpers
//! - `services`: Room business logic
//! - `backup`: Snapshot-to-backup rotation
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust,ignore
//! use hotel::config::{paths::HotelPaths, settings::Settings};
//! use hotel::cli::Menu;
//!
//! let paths = HotelPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let stdin = std::io::stdin();
//! Menu::from_settings(stdin.lock(), std::io::stdout(), &paths, &settings).run()?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::HotelError;
