//! Snapshot CLI commands
//!
//! Reads the operator's snapshot file without entering the menu. Saving needs
//! a live registry, so it is only offered from the menu.

use clap::Subcommand;

use crate::config::paths::HotelPaths;
use crate::config::settings::Settings;
use crate::error::{HotelError, HotelResult};
use crate::storage::SnapshotStore;

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Print the snapshot file
    Show,

    /// Print the snapshot file location
    Path,
}

/// Handle a snapshot command
pub fn handle_snapshot_command(
    paths: &HotelPaths,
    settings: &Settings,
    cmd: SnapshotCommands,
) -> HotelResult<()> {
    let store = SnapshotStore::new(
        paths.snapshot_file(&settings.operator_id),
        settings.timestamp_format.clone(),
    );

    match cmd {
        SnapshotCommands::Show => match store.read() {
            Ok(content) if content.is_empty() => {
                println!("Snapshot file is empty.");
            }
            Ok(content) => print!("{}", content),
            Err(HotelError::NotFound { .. }) => {
                println!("No snapshot found at {}", store.path().display());
                println!("Save one from the menu with option 7.");
            }
            Err(e) => return Err(e),
        },

        SnapshotCommands::Path => {
            println!("{}", store.path().display());
        }
    }

    Ok(())
}
