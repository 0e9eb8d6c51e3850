//! Commit Log
//!
//! Ordered sequence of immutable commits, each a full snapshot of the staged
//! path/hash table, plus one manifest per commit. The log document is
//! rewritten whole on every commit; it is only ever appended to logically.

pub mod manifest;

pub use manifest::{Manifest, ManifestStore};

use crate::error::{StorageError, TigError};
use crate::stage::StageManager;
use crate::store::document::{read_json, write_json};
use crate::store::ContentStore;
use crate::tree::hasher;
use crate::types::{CommitId, ContentHash, RepoPath};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Human-readable UTC date format stored with each commit
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of commits `log` shows when no count is given
pub const DEFAULT_LOG_LIMIT: usize = 5;

/// Immutable commit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    pub date: String,
    pub message: String,
    pub files: BTreeMap<RepoPath, ContentHash>,
    pub timestamp: i64,
}

/// Commit log document plus the manifests directory
pub struct CommitLog {
    path: PathBuf,
    manifests: ManifestStore,
}

impl CommitLog {
    pub fn new(path: PathBuf, manifests: ManifestStore) -> Self {
        Self { path, manifests }
    }

    pub fn manifests(&self) -> &ManifestStore {
        &self.manifests
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// All commits, oldest first; `None` when no commit was ever recorded.
    pub fn load(&self) -> Result<Option<Vec<Commit>>, StorageError> {
        read_json(&self.path)
    }

    /// All commits, oldest first, or `NoCommits` when the log is absent.
    pub fn load_required(&self) -> Result<Vec<Commit>, TigError> {
        self.load()?.ok_or(TigError::NoCommits)
    }

    /// Record the current stage as a new commit.
    ///
    /// Ensures every staged blob is stored, writes the manifest, appends to the
    /// log and clears the stage, in that order. A failure before the log is
    /// rewritten leaves the stage untouched.
    pub fn commit(
        &self,
        root: &Path,
        stage: &StageManager,
        store: &dyn ContentStore,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<Commit, TigError> {
        let staged = stage.load()?;
        if staged.is_empty() {
            return Err(TigError::NothingStaged);
        }

        let timestamp = now.timestamp();
        if self.manifests.exists(timestamp) {
            return Err(TigError::TimestampCollision(timestamp));
        }

        let mut commits = self.load()?.unwrap_or_default();
        let taken: HashSet<&str> = commits.iter().map(|c| c.id.as_str()).collect();
        let mut id = CommitId::generate();
        while taken.contains(id.as_str()) {
            id = CommitId::generate();
        }

        for entry in staged.entries() {
            ensure_blob(root, entry.path(), entry.hash(), store)?;
        }

        let manifest = Manifest {
            timestamp,
            entries: staged
                .entries()
                .iter()
                .map(|e| (e.path().clone(), e.hash().clone()))
                .collect(),
        };
        self.manifests.write(&manifest)?;

        let commit = Commit {
            id,
            date: now.format(DATE_FORMAT).to_string(),
            message: message.to_string(),
            files: staged.to_files(),
            timestamp,
        };
        commits.push(commit.clone());

        if let Err(e) = write_json(&self.path, &commits) {
            if let Err(cleanup) = self.manifests.remove(timestamp) {
                warn!(timestamp, error = %cleanup, "failed to roll back manifest");
            }
            return Err(e.into());
        }

        stage.clear()?;
        info!(
            commit_id = %commit.id,
            files = commit.files.len(),
            timestamp,
            "recorded commit"
        );
        Ok(commit)
    }

    /// The `limit` most recent commits, newest first.
    pub fn log(&self, limit: usize) -> Result<Vec<Commit>, TigError> {
        let commits = self.load_required()?;
        Ok(commits.into_iter().rev().take(limit).collect())
    }

    /// Locate a commit by its id.
    pub fn find(&self, id: &str) -> Result<Commit, TigError> {
        self.load_required()?
            .into_iter()
            .find(|c| c.id.as_str() == id)
            .ok_or_else(|| TigError::CommitNotFound(id.to_string()))
    }
}

/// Make sure the blob for a staged entry exists, copying the working file in if needed.
fn ensure_blob(
    root: &Path,
    path: &RepoPath,
    hash: &ContentHash,
    store: &dyn ContentStore,
) -> Result<(), TigError> {
    if store.contains(hash)? {
        return Ok(());
    }

    let location = path.to_fs_path(root);
    if !location.is_file() {
        return Err(TigError::FileNotFound(path.clone()));
    }
    let bytes = fs::read(&location).map_err(StorageError::from)?;
    if &hasher::compute_content_hash(&bytes) != hash {
        return Err(TigError::StaleStage(path.clone()));
    }
    store.put(&bytes)?;
    debug!(path = %path, hash = %hash, "copied missing blob from working tree");
    Ok(())
}
