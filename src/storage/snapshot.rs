//! Snapshot file for room allocations
//!
//! Each save appends one block: a timestamped header followed by one line per
//! occupied room. Free rooms are never written. The file is a human-readable
//! log and is never parsed back into a registry.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{HotelError, HotelResult};

use super::file_io::{append_text, make_writable, read_text_required};
use super::rooms::RoomRegistry;

/// Build the header line that opens a snapshot block
pub fn snapshot_header(timestamp: &str) -> String {
    format!("--- Room Allocation Snapshot @ {} ---", timestamp)
}

/// Append-only store for allocation snapshots
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
    timestamp_format: String,
}

impl SnapshotStore {
    /// Create a store writing to `path`, stamping headers with `timestamp_format`
    pub fn new(path: PathBuf, timestamp_format: impl Into<String>) -> Self {
        Self {
            path,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the snapshot file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append a snapshot of the occupied rooms
    ///
    /// Returns the number of rooms written. Whatever the outcome, the file's
    /// read-only flag is cleared afterwards if the file exists.
    pub fn save(&self, registry: &RoomRegistry) -> HotelResult<usize> {
        let result = self.append_block(registry);

        match make_writable(&self.path) {
            Ok(true) => log::info!("Restored write access on {}", self.path.display()),
            Ok(false) => {}
            Err(e) => log::warn!("{}", e),
        }

        result
    }

    fn append_block(&self, registry: &RoomRegistry) -> HotelResult<usize> {
        let timestamp = Local::now().format(&self.timestamp_format).to_string();

        let mut block = snapshot_header(&timestamp);
        block.push('\n');

        let mut written = 0;
        for room in registry.allocated() {
            block.push_str(&room.snapshot_line());
            block.push('\n');
            written += 1;
        }

        append_text(&self.path, &block)?;
        log::debug!(
            "Appended snapshot of {} room(s) to {}",
            written,
            self.path.display()
        );

        Ok(written)
    }

    /// Read the snapshot file verbatim
    pub fn read(&self) -> HotelResult<String> {
        read_text_required(&self.path).map_err(|e| {
            if e.is_not_found() {
                HotelError::NotFound {
                    entity_type: "Snapshot file",
                    identifier: self.path.display().to_string(),
                }
            } else {
                e
            }
        })
    }
}
