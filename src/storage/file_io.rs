//! File I/O utilities
//!
//! JSON reads and atomic writes for the settings file, plus the plain-text
//! append/read/truncate helpers used by the snapshot and backup files.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::HotelError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, HotelError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| HotelError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| HotelError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), HotelError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            HotelError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| HotelError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| HotelError::Json(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| HotelError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| HotelError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        HotelError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append text to a file, creating it if absent
///
/// A permission failure on open is reported as `AccessDenied`; every other
/// failure is plain I/O. The handle is dropped before returning.
pub fn append_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), HotelError> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| open_error(path, e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| HotelError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    writer
        .flush()
        .map_err(|e| HotelError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Map a failure to open `path` for writing
fn open_error(path: &Path, e: std::io::Error) -> HotelError {
    match e.kind() {
        ErrorKind::PermissionDenied => HotelError::AccessDenied(format!(
            "Access to the path '{}' is denied: {}",
            path.display(),
            e
        )),
        _ => HotelError::Io(format!("Failed to open {}: {}", path.display(), e)),
    }
}

/// Read a whole text file, returning `NotFound` if it doesn't exist
pub fn read_text_required<P: AsRef<Path>>(path: P) -> Result<String, HotelError> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HotelError::file_not_found(path),
        _ => HotelError::Io(format!("Failed to read {}: {}", path.display(), e)),
    })
}

/// Truncate a file to zero length
pub fn truncate<P: AsRef<Path>>(path: P) -> Result<(), HotelError> {
    let path = path.as_ref();

    File::create(path)
        .map(|_| ())
        .map_err(|e| HotelError::Io(format!("Failed to clear {}: {}", path.display(), e)))
}

/// Clear the read-only flag on a file if it exists
///
/// On Unix only the owner write bit is added back. Returns whether the
/// permissions were changed.
pub fn make_writable<P: AsRef<Path>>(path: P) -> Result<bool, HotelError> {
    let path = path.as_ref();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(HotelError::Io(format!(
                "Failed to stat {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut permissions = metadata.permissions();
    if !permissions.readonly() {
        return Ok(false);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(permissions.mode() | 0o200);
    }
    #[cfg(not(unix))]
    permissions.set_readonly(false);

    fs::set_permissions(path, permissions).map_err(|e| {
        HotelError::Io(format!(
            "Failed to restore write access on {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(true)
}
