//! Repository handle
//!
//! Ties the content store, stage, commit log and the read-only engines to one
//! repository root. Every call reloads persisted state from disk; mutating
//! calls hold the repository lock for their whole duration.

pub mod layout;
pub mod lock;

pub use layout::{RepoLayout, STATE_DIR};
pub use lock::RepoLock;

use crate::checkout;
use crate::config::TigConfig;
use crate::diff::{self, DiffOptions, DiffReport};
use crate::error::{StorageError, TigError};
use crate::history::{Commit, CommitLog, ManifestStore};
use crate::ignore::IgnoreList;
use crate::stage::{AddOutcome, Stage, StageManager};
use crate::status::{self, StatusReport};
use crate::store::{self, ContentStore, FsContentStore};
use crate::tree::path::canonicalize_root;
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::{ContentHash, RepoPath};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What `init` created
#[derive(Debug, Clone, Serialize)]
pub struct InitSummary {
    pub root: PathBuf,
    pub created_root: bool,
    pub created_state_dir: bool,
}

/// Result of staging one path
#[derive(Debug, Clone, Serialize)]
pub struct AddResult {
    pub path: RepoPath,
    pub outcome: AddOutcome,
}

/// Result of a checkout
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSummary {
    pub commit: Commit,
    pub restored: Vec<RepoPath>,
}

/// Which recorded version a diff compared against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffSource {
    Manifest { timestamp: i64 },
    Commit { id: String },
}

/// Diff of one working file against a recorded version
#[derive(Debug, Clone, Serialize)]
pub struct FileDiff {
    pub path: RepoPath,
    pub source: DiffSource,
    pub report: DiffReport,
}

/// Handle to an initialized repository
pub struct Repository {
    layout: RepoLayout,
    config: TigConfig,
    store: FsContentStore,
    stage: StageManager,
    history: CommitLog,
}

impl Repository {
    /// Create the repository root (if missing) and its state directory.
    ///
    /// Idempotent. The commit log is only created by the first commit.
    pub fn init(path: &Path) -> Result<InitSummary, TigError> {
        let created_root = !path.exists();
        if created_root {
            fs::create_dir_all(path).map_err(StorageError::from)?;
        }
        let root = canonicalize_root(path)?;
        let layout = RepoLayout::new(root.clone());

        let created_state_dir = !layout.is_initialized();
        fs::create_dir_all(layout.objects_dir()).map_err(StorageError::from)?;
        fs::create_dir_all(layout.manifests_dir()).map_err(StorageError::from)?;

        info!(root = %root.display(), created_root, created_state_dir, "initialized repository");
        Ok(InitSummary {
            root,
            created_root,
            created_state_dir,
        })
    }

    /// Open an existing repository rooted at `root`.
    pub fn open(root: &Path, config: TigConfig) -> Result<Self, TigError> {
        if !root.is_dir() {
            return Err(TigError::RepositoryRootMissing(root.to_path_buf()));
        }
        let layout = RepoLayout::new(canonicalize_root(root)?);
        if !layout.is_initialized() {
            return Err(TigError::NotInitialized(layout.root().to_path_buf()));
        }

        let store = FsContentStore::new(layout.objects_dir())?;
        let stage = StageManager::new(layout.stage_file());
        let history = CommitLog::new(
            layout.commits_file(),
            ManifestStore::new(layout.manifests_dir()),
        );
        debug!(root = %layout.root().display(), "opened repository");

        Ok(Self {
            layout,
            config,
            store,
            stage,
            history,
        })
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    pub fn config(&self) -> &TigConfig {
        &self.config
    }

    pub fn store(&self) -> &FsContentStore {
        &self.store
    }

    pub fn history(&self) -> &CommitLog {
        &self.history
    }

    /// Current stage contents.
    pub fn stage(&self) -> Result<Stage, TigError> {
        Ok(self.stage.load()?)
    }

    /// Stage the file at `path` (relative to the root, or absolute inside it).
    pub fn add(&self, path: &str) -> Result<AddResult, TigError> {
        let path = self.resolve_path(path)?;
        if self.ignore_list()?.is_ignored(&path) {
            return Err(TigError::Ignored(path));
        }

        let _lock = self.lock()?;
        let outcome = self.stage.add(self.root(), &path, &self.store)?;
        Ok(AddResult { path, outcome })
    }

    /// Commit the stage with the current time.
    pub fn commit(&self, message: &str) -> Result<Commit, TigError> {
        self.commit_at(message, Utc::now())
    }

    /// Commit the stage as of `now`.
    pub fn commit_at(&self, message: &str, now: DateTime<Utc>) -> Result<Commit, TigError> {
        let _lock = self.lock()?;
        self.history
            .commit(self.root(), &self.stage, &self.store, message, now)
    }

    /// Most recent commits, newest first; `None` uses `core.log_limit`.
    pub fn log(&self, limit: Option<usize>) -> Result<Vec<Commit>, TigError> {
        self.history.log(limit.unwrap_or(self.config.core.log_limit))
    }

    /// Classify every file in the working tree. Never writes.
    pub fn status(&self) -> Result<StatusReport, TigError> {
        let stage = self.stage.load()?;
        let commits = self.history.load()?.unwrap_or_default();
        let walker = self.walker()?;
        Ok(status::compute(store::scan(&walker), &stage, &commits)?)
    }

    /// Restore the working-tree files recorded by `commit_id`.
    pub fn checkout(&self, commit_id: &str) -> Result<CheckoutSummary, TigError> {
        let _lock = self.lock()?;
        let commit = self.history.find(commit_id)?;
        let restored = checkout::restore(self.root(), &commit, &self.store)?;
        Ok(CheckoutSummary { commit, restored })
    }

    /// Diff `path` against the most recently written manifest.
    pub fn diff(&self, path: &str) -> Result<FileDiff, TigError> {
        let path = self.resolve_path(path)?;
        let manifest = self
            .history
            .manifests()
            .latest()?
            .ok_or(TigError::NoManifest)?;
        let hash = manifest
            .get(&path)
            .cloned()
            .ok_or_else(|| TigError::PathNotRecorded {
                path: path.clone(),
                source_key: format!("manifest {}", manifest.timestamp),
            })?;
        let report = self.diff_blob(&path, &hash)?;
        Ok(FileDiff {
            path,
            source: DiffSource::Manifest {
                timestamp: manifest.timestamp,
            },
            report,
        })
    }

    /// Diff `path` against the version recorded by a specific commit.
    pub fn diff_against(&self, path: &str, commit_id: &str) -> Result<FileDiff, TigError> {
        let path = self.resolve_path(path)?;
        let commit = self.history.find(commit_id)?;
        let hash = commit
            .files
            .get(&path)
            .cloned()
            .ok_or_else(|| TigError::PathNotRecorded {
                path: path.clone(),
                source_key: format!("commit {}", commit.id),
            })?;
        let report = self.diff_blob(&path, &hash)?;
        Ok(FileDiff {
            path,
            source: DiffSource::Commit {
                id: commit.id.to_string(),
            },
            report,
        })
    }

    fn diff_blob(&self, path: &RepoPath, hash: &ContentHash) -> Result<DiffReport, TigError> {
        let recorded = self
            .store
            .get(hash)?
            .ok_or_else(|| TigError::BlobNotFound(hash.clone()))?;
        let location = path.to_fs_path(self.root());
        if !location.is_file() {
            return Err(TigError::FileNotFound(path.clone()));
        }
        let working = fs::read(&location).map_err(StorageError::from)?;
        let options = DiffOptions {
            context_lines: self.config.core.diff_context,
        };
        Ok(diff::diff_contents(path.as_str(), &recorded, &working, &options))
    }

    fn lock(&self) -> Result<RepoLock, TigError> {
        RepoLock::acquire(&self.layout.lock_file())
    }

    fn ignore_list(&self) -> Result<IgnoreList, TigError> {
        Ok(IgnoreList::load(&self.layout.ignore_file())?)
    }

    fn walker(&self) -> Result<Walker, TigError> {
        let config = WalkerConfig {
            follow_symlinks: self.config.scan.follow_symlinks,
            require_extension: self.config.scan.require_extension,
            ignore: self.ignore_list()?,
        };
        Ok(Walker::with_config(self.root().to_path_buf(), config))
    }

    /// Turn user input into a repository key.
    fn resolve_path(&self, input: &str) -> Result<RepoPath, TigError> {
        let candidate = Path::new(input);
        if candidate.is_absolute() {
            let absolute = match candidate.parent().and_then(|p| canonicalize_root(p).ok()) {
                Some(parent) => parent.join(candidate.file_name().unwrap_or_default()),
                None => candidate.to_path_buf(),
            };
            return Ok(RepoPath::from_fs_path(self.root(), &absolute)?);
        }
        Ok(RepoPath::parse(input)?)
    }
}
