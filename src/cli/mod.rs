//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging clap argument parsing with the storage and service layers.

pub mod backup;
pub mod menu;
pub mod snapshot;

pub use backup::{handle_backup_command, BackupCommands};
pub use menu::{Menu, MenuChoice};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};
