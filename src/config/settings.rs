//! User settings for hotel-cli
//!
//! Manages operator preferences: the operator id baked into the snapshot file
//! names, the timestamp format used in file headers, rate strictness and the
//! default log level.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::HotelPaths;
use crate::error::HotelError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for hotel-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Operator id used to name the snapshot and backup files
    #[serde(default = "default_operator_id")]
    pub operator_id: String,

    /// strftime format for snapshot and backup headers
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Reject negative nightly rates when adding rooms
    #[serde(default)]
    pub strict_rates: bool,

    /// Log filter used when `HOTEL_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_operator_id() -> String {
    "12345".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            operator_id: default_operator_id(),
            timestamp_format: default_timestamp_format(),
            strict_rates: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// Missing fields take their defaults and the operator id is trimmed.
    /// Nothing is written; the caller decides when to persist.
    pub fn load_or_create(paths: &HotelPaths) -> Result<Self, HotelError> {
        let mut settings: Settings = read_json(paths.settings_file())?;
        settings.operator_id = settings.operator_id.trim().to_string();
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HotelPaths) -> Result<(), HotelError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check the operator id can be used inside a file name and the
    /// timestamp format is a valid strftime string
    pub fn validate(&self) -> Result<(), HotelError> {
        let id = self.operator_id.as_str();
        if id.trim().is_empty() {
            return Err(HotelError::Config("operator_id cannot be empty".into()));
        }
        if id.trim() != id {
            return Err(HotelError::Config(format!(
                "operator_id '{}' cannot start or end with whitespace",
                id
            )));
        }
        if id.contains(['/', '\\']) || id.contains("..") {
            return Err(HotelError::Config(format!(
                "operator_id '{}' cannot contain path separators",
                id
            )));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(HotelError::Config(format!(
                "timestamp_format '{}' is not a valid strftime format",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.operator_id, "12345");
        assert_eq!(settings.log_level, "warn");
        assert!(!settings.strict_rates);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HotelPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.operator_id, "12345");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HotelPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            operator_id: "A9".into(),
            strict_rates: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.operator_id, "A9");
        assert!(loaded.strict_rates);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HotelPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"operator_id": "777"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.operator_id, "777");
        assert_eq!(loaded.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_operator_id_with_separator_rejected() {
        let settings = Settings {
            operator_id: "../etc".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(HotelError::Config(_))));
    }

    #[test]
    fn test_operator_id_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HotelPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"operator_id": " 12 "}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.operator_id, "12");
        assert_eq!(
            paths.snapshot_file(&loaded.operator_id),
            temp_dir.path().join("lhms_12.txt")
        );

        let padded = Settings {
            operator_id: " 12 ".into(),
            ..Settings::default()
        };
        assert!(matches!(padded.validate(), Err(HotelError::Config(_))));
    }

    #[test]
    fn test_bad_timestamp_format_rejected() {
        let settings = Settings {
            timestamp_format: "%Q".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }
}
