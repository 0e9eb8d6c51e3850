//! Path canonicalization and normalization utilities

use crate::error::StorageError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize the repository root
///
/// Resolves symlinks, `..` and `.` so that files found by the scanner can be
/// made relative to it. Uses dunce to avoid UNC prefixes on Windows.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, StorageError> {
    dunce::canonicalize(root).map_err(|e| {
        StorageError::InvalidPath(format!("Failed to canonicalize {:?}: {}", root, e))
    })
}

/// Normalize a repository-relative path string into its key form
///
/// This function:
/// 1. Normalizes Unicode to NFC
/// 2. Treats `\` and `/` as separators and joins with `/`
/// 3. Drops empty and `.` components
/// 4. Rejects absolute paths and `..` components
pub fn normalize_repo_path(path: &str) -> Result<String, StorageError> {
    let normalized: String = path.nfc().collect();

    if normalized.starts_with('/') || normalized.starts_with('\\') || has_drive_prefix(&normalized) {
        return Err(StorageError::InvalidPath(format!(
            "{} is absolute; paths must be relative to the repository root",
            path
        )));
    }

    let mut components = Vec::new();
    for component in normalized.split(['/', '\\']) {
        match component {
            "" | "." => continue,
            ".." => {
                return Err(StorageError::InvalidPath(format!(
                    "{} escapes the repository root",
                    path
                )))
            }
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return Err(StorageError::InvalidPath(format!("{:?} names no file", path)));
    }

    Ok(components.join("/"))
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
