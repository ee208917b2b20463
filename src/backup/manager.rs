//! Backup rotation for the snapshot file
//!
//! A rotation copies the whole snapshot file into the backup file under a
//! timestamped header, then truncates the snapshot. The two steps are not
//! atomic: if the truncate fails the snapshot keeps its content and the
//! backup already holds a copy.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::paths::HotelPaths;
use crate::config::settings::Settings;
use crate::error::{HotelError, HotelResult};
use crate::storage::file_io::{append_text, read_text_required, truncate};

/// Result of a rotation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// No snapshot file existed, nothing was done
    NoSnapshot,
    /// The snapshot was copied and cleared
    Rotated {
        /// Bytes moved into the backup file
        bytes: usize,
    },
}

/// Build the header line that opens a backup block
pub fn backup_header(timestamp: &str) -> String {
    format!("--- Backup @ {} ---", timestamp)
}

/// Moves snapshot content into the operator's backup file
pub struct BackupManager {
    /// Snapshot file being rotated
    snapshot_path: PathBuf,
    /// Append-only backup file
    backup_path: PathBuf,
    /// strftime format for block headers
    timestamp_format: String,
}

impl BackupManager {
    /// Create a new BackupManager for explicit file paths
    pub fn new(
        snapshot_path: PathBuf,
        backup_path: PathBuf,
        timestamp_format: impl Into<String>,
    ) -> Self {
        Self {
            snapshot_path,
            backup_path,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Create a BackupManager for the configured operator's files
    pub fn for_operator(paths: &HotelPaths, settings: &Settings) -> Self {
        Self::new(
            paths.snapshot_file(&settings.operator_id),
            paths.backup_file(&settings.operator_id),
            settings.timestamp_format.clone(),
        )
    }

    /// Path of the backup file
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Copy the snapshot into the backup file, then clear the snapshot
    ///
    /// Any failure along the way is reported as `HotelError::Backup`.
    pub fn rotate(&self) -> HotelResult<RotateOutcome> {
        self.rotate_with(|path| truncate(path))
    }

    fn rotate_with<F>(&self, clear: F) -> HotelResult<RotateOutcome>
    where
        F: FnOnce(&Path) -> HotelResult<()>,
    {
        if !self.snapshot_path.exists() {
            log::debug!(
                "No snapshot at {}, skipping rotation",
                self.snapshot_path.display()
            );
            return Ok(RotateOutcome::NoSnapshot);
        }

        self.copy_and_clear(clear)
            .map(|bytes| RotateOutcome::Rotated { bytes })
            .map_err(|e| {
                log::warn!("Backup rotation failed: {}", e);
                HotelError::Backup(e.to_string())
            })
    }

    fn copy_and_clear<F>(&self, clear: F) -> HotelResult<usize>
    where
        F: FnOnce(&Path) -> HotelResult<()>,
    {
        let content = read_text_required(&self.snapshot_path)?;
        let timestamp = Local::now().format(&self.timestamp_format).to_string();

        let block = format!("{}\n{}\n", backup_header(&timestamp), content);
        append_text(&self.backup_path, &block)?;

        clear(&self.snapshot_path)?;
        log::info!(
            "Rotated {} byte(s) from {} into {}",
            content.len(),
            self.snapshot_path.display(),
            self.backup_path.display()
        );

        Ok(content.len())
    }

    /// Read the backup file, if one has been written
    pub fn read_backup(&self) -> HotelResult<Option<String>> {
        match read_text_required(&self.backup_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
