//! Stage Manager
//!
//! Persisted, insertion-ordered mapping of repository path to content hash
//! holding the changes that the next commit will record. The document is
//! reloaded from disk on every operation.

use crate::error::{StorageError, TigError};
use crate::store::document::{read_json, write_json};
use crate::store::ContentStore;
use crate::types::{ContentHash, RepoPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One pending change, persisted as a `[path, hash]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedEntry(pub RepoPath, pub ContentHash);

impl StagedEntry {
    pub fn path(&self) -> &RepoPath {
        &self.0
    }

    pub fn hash(&self) -> &ContentHash {
        &self.1
    }
}

/// In-memory form of the stage document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage {
    entries: Vec<StagedEntry>,
}

impl Stage {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[StagedEntry] {
        &self.entries
    }

    pub fn get(&self, path: &RepoPath) -> Option<&ContentHash> {
        self.entries
            .iter()
            .find(|entry| entry.path() == path)
            .map(StagedEntry::hash)
    }

    /// True when exactly this (path, hash) pair is staged.
    pub fn contains(&self, path: &RepoPath, hash: &ContentHash) -> bool {
        self.get(path) == Some(hash)
    }

    /// Insert or overwrite, reporting what changed.
    pub fn upsert(&mut self, path: RepoPath, hash: ContentHash) -> AddOutcome {
        match self.entries.iter().position(|entry| entry.path() == &path) {
            Some(i) if self.entries[i].hash() == &hash => AddOutcome::AlreadyStaged,
            Some(i) => {
                self.entries[i].1 = hash;
                AddOutcome::Updated
            }
            None => {
                self.entries.push(StagedEntry(path, hash));
                AddOutcome::Added
            }
        }
    }

    /// The staged pairs as the path-keyed map a commit records.
    pub fn to_files(&self) -> BTreeMap<RepoPath, ContentHash> {
        self.entries
            .iter()
            .map(|entry| (entry.0.clone(), entry.1.clone()))
            .collect()
    }
}

/// Result of staging a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    Updated,
    AlreadyStaged,
}

/// Loads, mutates and persists the stage document.
pub struct StageManager {
    path: PathBuf,
}

impl StageManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stage; a missing document is an empty stage.
    pub fn load(&self) -> Result<Stage, StorageError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, stage: &Stage) -> Result<(), StorageError> {
        write_json(&self.path, stage)
    }

    /// Stage the file at `path` under `root`.
    ///
    /// The content is written to the store so the commit never depends on the
    /// working file still holding the staged bytes.
    pub fn add(
        &self,
        root: &Path,
        path: &RepoPath,
        store: &dyn ContentStore,
    ) -> Result<AddOutcome, TigError> {
        let location = path.to_fs_path(root);
        if !location.is_file() {
            return Err(TigError::FileNotFound(path.clone()));
        }

        let bytes = fs::read(&location).map_err(StorageError::from)?;
        let hash = store.put(&bytes)?;

        let mut stage = self.load()?;
        let outcome = stage.upsert(path.clone(), hash.clone());
        match outcome {
            AddOutcome::AlreadyStaged => {
                debug!(path = %path, hash = %hash, "file already staged");
            }
            AddOutcome::Added | AddOutcome::Updated => {
                self.save(&stage)?;
                info!(path = %path, hash = %hash, outcome = ?outcome, "staged file");
            }
        }
        Ok(outcome)
    }

    /// Replace the persisted stage with an empty one.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.save(&Stage::default())
    }
}
