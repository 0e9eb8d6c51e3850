//! Working-tree walker: lazily yields the files a repository tracks

use crate::error::StorageError;
use crate::ignore::IgnoreList;
use crate::types::RepoPath;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// A regular file found under the repository root
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Repository-relative key
    pub path: RepoPath,
    /// Absolute location on disk
    pub location: PathBuf,
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Only yield files whose name contains a `.` (default: true)
    pub require_extension: bool,
    /// Paths to skip; ignored directories are not descended into
    pub ignore: IgnoreList,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            require_extension: true,
            ignore: IgnoreList::default(),
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree, yielding files in file-name order
    pub fn files(&self) -> impl Iterator<Item = Result<FileEntry, StorageError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.should_ignore(entry))
            .filter_map(move |entry| match entry {
                Err(e) => Some(Err(StorageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk directory: {}", e),
                )))),
                Ok(entry) => self.to_file_entry(entry).transpose(),
            })
    }

    fn to_file_entry(&self, entry: DirEntry) -> Result<Option<FileEntry>, StorageError> {
        if !entry.file_type().is_file() {
            // Directories, and symlinks when not following them
            return Ok(None);
        }
        if self.config.require_extension && !entry.file_name().to_string_lossy().contains('.') {
            return Ok(None);
        }
        let path = match RepoPath::from_fs_path(&self.root, entry.path()) {
            Ok(path) => path,
            Err(StorageError::InvalidPath(reason)) => {
                warn!(reason = %reason, "skipping file that cannot be tracked");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        Ok(Some(FileEntry {
            path,
            location: entry.into_path(),
        }))
    }

    /// Check if an entry should be ignored based on the ignore list
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        match entry.path().strip_prefix(&self.root) {
            Ok(relative) => {
                let relative = relative.to_string_lossy().replace('\\', "/");
                self.config.ignore.matches(&relative)
            }
            Err(_) => false,
        }
    }
}
