//! Exclusive repository lock for mutating operations

use crate::error::TigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Held for the duration of `add`, `commit` and `checkout`.
///
/// The lock file is created with create-new semantics, so a second process
/// fails immediately instead of interleaving its read-modify-write with ours.
/// The file is removed when the guard drops.
#[derive(Debug)]
pub struct RepoLock {
    path: PathBuf,
}

impl RepoLock {
    pub fn acquire(path: &Path) -> Result<Self, TigError> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(TigError::Locked(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        let guard = Self {
            path: path.to_path_buf(),
        };
        writeln!(file, "{}", std::process::id())?;
        debug!(lock = %path.display(), "acquired repository lock");
        Ok(guard)
    }
}

impl Drop for RepoLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(lock = %self.path.display(), error = %e, "failed to release repository lock");
        }
    }
}
