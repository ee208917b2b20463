//! Backup system for hotel-cli
//!
//! Rolls the operator's snapshot file into an append-only backup file.
//!
//! # Backup Format
//!
//! Each rotation appends a block to `lhms_<operator>_backup.txt`:
//!
//! ```text
//! --- Backup @ 2025-01-31 18:04:11 ---
//! <verbatim snapshot file content>
//! ```
//!
//! after which the snapshot file is truncated to empty.
//!
//! # Example
//!
//! ```rust,ignore
//! use hotel::backup::{BackupManager, RotateOutcome};
//!
//! let manager = BackupManager::for_operator(&paths, &settings);
//! match manager.rotate()? {
//!     RotateOutcome::NoSnapshot => println!("No file to backup."),
//!     RotateOutcome::Rotated { .. } => println!("Backup completed."),
//! }
//! ```

mod manager;

pub use manager::{backup_header, BackupManager, RotateOutcome};
