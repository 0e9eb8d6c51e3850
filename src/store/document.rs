//! Whole-document persistence helpers
//!
//! Every persisted document is written to a uniquely named temporary file in
//! the target's directory and then renamed over the target, so readers never
//! observe a partially written file and no existing sibling is touched.

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace `path` with `bytes`.
///
/// An existing target keeps its permissions.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| {
        StorageError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to create parent directory {:?}: {}", parent, e),
        ))
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        StorageError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to create temp file in {:?}: {}", parent, e),
        ))
    })?;
    temp.write_all(bytes).map_err(|e| {
        StorageError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to write {:?}: {}", temp.path(), e),
        ))
    })?;
    match fs::metadata(path) {
        Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
        Err(_) => default_permissions(temp.as_file())?,
    }

    // Dropping the error's temp file removes it.
    temp.persist(path).map_err(|e| {
        StorageError::IoError(std::io::Error::new(
            e.error.kind(),
            format!("Failed to rename temp file to {:?}: {}", path, e.error),
        ))
    })?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

/// Read a JSON document, returning `None` when it does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| StorageError::CorruptDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Serialize `value` as pretty JSON and atomically replace `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let bytes =
        serde_json::to_vec_pretty(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    write_atomic(path, &bytes)
}
