//! Checkout Engine
//!
//! Restores working-tree files from a commit's recorded blobs. Files the
//! commit does not mention are left alone, and a failure part way through
//! leaves earlier files already restored.

use crate::error::{StorageError, TigError};
use crate::history::Commit;
use crate::store::document::write_atomic;
use crate::store::ContentStore;
use crate::types::RepoPath;
use std::path::Path;
use tracing::{debug, info};

/// Write every file of `commit` into the working tree under `root`.
///
/// Returns the restored paths in commit order.
pub fn restore(
    root: &Path,
    commit: &Commit,
    store: &dyn ContentStore,
) -> Result<Vec<RepoPath>, TigError> {
    let mut restored = Vec::with_capacity(commit.files.len());
    for (path, hash) in &commit.files {
        let bytes = store
            .get(hash)?
            .ok_or_else(|| TigError::BlobNotFound(hash.clone()))?;
        let location = path.to_fs_path(root);
        write_atomic(&location, &bytes).map_err(|e| match e {
            StorageError::IoError(io) => StorageError::IoError(std::io::Error::new(
                io.kind(),
                format!("Failed to restore {}: {}", path, io),
            )),
            other => other,
        })?;
        debug!(path = %path, hash = %hash, "restored file");
        restored.push(path.clone());
    }
    info!(commit_id = %commit.id, files = restored.len(), "checked out commit");
    Ok(restored)
}
