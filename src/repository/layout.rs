//! On-disk layout of a repository's state directory.

use std::path::{Path, PathBuf};

/// Name of the state directory at the repository root
pub const STATE_DIR: &str = ".tig";

/// Resolves every persisted-state path from the repository root
#[derive(Debug, Clone)]
pub struct RepoLayout {
    root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.state_dir().join("objects")
    }

    pub fn manifests_dir(&self) -> PathBuf {
        self.state_dir().join("manifests")
    }

    pub fn stage_file(&self) -> PathBuf {
        self.state_dir().join("stage.json")
    }

    pub fn commits_file(&self) -> PathBuf {
        self.state_dir().join("commits.json")
    }

    pub fn ignore_file(&self) -> PathBuf {
        self.state_dir().join(".tigignore")
    }

    pub fn config_file(&self) -> PathBuf {
        self.state_dir().join("config.toml")
    }

    pub fn lock_file(&self) -> PathBuf {
        self.state_dir().join("lock")
    }

    pub fn is_initialized(&self) -> bool {
        self.state_dir().is_dir()
    }
}
