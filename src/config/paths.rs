//! Path management for hotel-cli
//!
//! Provides XDG-compliant path resolution for settings, snapshots and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `HOTEL_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/hotel-cli` or `~/.config/hotel-cli`
//! 3. Windows: `%APPDATA%\hotel-cli`

use std::path::PathBuf;

use crate::error::HotelError;

/// Manages all paths used by hotel-cli
#[derive(Debug, Clone)]
pub struct HotelPaths {
    /// Base directory for all hotel-cli data
    base_dir: PathBuf,
}

impl HotelPaths {
    /// Create a new HotelPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HotelError> {
        let base_dir = if let Ok(custom) = std::env::var("HOTEL_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HotelPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/hotel-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the snapshot file for an operator (`lhms_<id>.txt`)
    pub fn snapshot_file(&self, operator_id: &str) -> PathBuf {
        self.base_dir.join(format!("lhms_{}.txt", operator_id))
    }

    /// Get the backup file for an operator (`lhms_<id>_backup.txt`)
    pub fn backup_file(&self, operator_id: &str) -> PathBuf {
        self.base_dir.join(format!("lhms_{}_backup.txt", operator_id))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), HotelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HotelError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if hotel-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HotelError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| HotelError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("hotel-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HotelError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HotelError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("hotel-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HotelPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("HOTEL_CLI_DATA_DIR", custom_path);

        let paths = HotelPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("HOTEL_CLI_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("hotel");
        let paths = HotelPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }

    #[test]
    fn test_operator_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HotelPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.snapshot_file("12345"),
            temp_dir.path().join("lhms_12345.txt")
        );
        assert_eq!(
            paths.backup_file("12345"),
            temp_dir.path().join("lhms_12345_backup.txt")
        );
    }
}
