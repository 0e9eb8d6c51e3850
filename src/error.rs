//! Error types for the tig version control system.

use crate::types::{ContentHash, RepoPath};
use std::path::PathBuf;
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid content hash: {0}")]
    InvalidHash(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Corrupt document {path:?}: {reason}")]
    CorruptDocument { path: PathBuf, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse classification used by the CLI to present failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PreconditionFailed,
    NotFound,
    Storage,
    Config,
}

/// Repository operation errors
#[derive(Debug, Error)]
pub enum TigError {
    #[error("Repository root does not exist: {0:?}")]
    RepositoryRootMissing(PathBuf),

    #[error("Not a tig repository: {0:?}. Run `tig init` first.")]
    NotInitialized(PathBuf),

    #[error("Repository is locked by another tig process ({0:?}). Remove the lock file if no other process is running.")]
    Locked(PathBuf),

    #[error("No files to commit. Nothing to change.")]
    NothingStaged,

    #[error("No commits found.")]
    NoCommits,

    #[error("No commits found. Commit a file first.")]
    NoManifest,

    #[error("A commit was already recorded at timestamp {0}; retry in a moment.")]
    TimestampCollision(i64),

    #[error("File {0} changed after it was staged; run `tig add {0}` again.")]
    StaleStage(RepoPath),

    #[error("File is ignored: {0}")]
    Ignored(RepoPath),

    #[error("File does not exist: {0}")]
    FileNotFound(RepoPath),

    #[error("Commit ID {0} not found.")]
    CommitNotFound(String),

    #[error("File {path} is not recorded in {source_key}.")]
    PathNotRecorded { path: RepoPath, source_key: String },

    #[error("Committed content {0} not found in the object store.")]
    BlobNotFound(ContentHash),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TigError {
    /// Classify the error for presentation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TigError::RepositoryRootMissing(_)
            | TigError::NotInitialized(_)
            | TigError::Locked(_)
            | TigError::NothingStaged
            | TigError::NoCommits
            | TigError::NoManifest
            | TigError::TimestampCollision(_)
            | TigError::StaleStage(_)
            | TigError::Ignored(_) => ErrorKind::PreconditionFailed,
            TigError::FileNotFound(_)
            | TigError::CommitNotFound(_)
            | TigError::PathNotRecorded { .. }
            | TigError::BlobNotFound(_) => ErrorKind::NotFound,
            TigError::StorageError(_) => ErrorKind::Storage,
            TigError::ConfigError(_) => ErrorKind::Config,
        }
    }
}

impl From<std::io::Error> for TigError {
    fn from(err: std::io::Error) -> Self {
        TigError::StorageError(StorageError::IoError(err))
    }
}

impl From<config::ConfigError> for TigError {
    fn from(err: config::ConfigError) -> Self {
        TigError::ConfigError(err.to_string())
    }
}
