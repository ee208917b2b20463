//! Backup CLI commands
//!
//! Implements CLI commands for backup rotation.

use clap::Subcommand;

use crate::backup::{BackupManager, RotateOutcome};
use crate::config::paths::HotelPaths;
use crate::config::settings::Settings;
use crate::error::HotelResult;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Copy the snapshot file into the backup file and clear it
    Rotate,

    /// Print the backup file
    Show,
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &HotelPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> HotelResult<()> {
    let manager = BackupManager::for_operator(paths, settings);

    match cmd {
        BackupCommands::Rotate => match manager.rotate()? {
            RotateOutcome::NoSnapshot => {
                println!("No file to backup.");
            }
            RotateOutcome::Rotated { bytes } => {
                println!("Backup completed. Original file cleared.");
                println!("Moved {} into {}", format_size(bytes), manager.backup_path().display());
            }
        },

        BackupCommands::Show => match manager.read_backup()? {
            Some(content) => print!("{}", content),
            None => {
                println!("No backup file found.");
                println!("Create one with: hotel backup rotate");
            }
        },
    }

    Ok(())
}

/// Format a byte count for display
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
