//! Core identifier types: content hashes, repository paths and commit ids.

use crate::error::StorageError;
use crate::tree::path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Number of hex characters kept from the content digest.
pub const HASH_LEN: usize = 16;

/// Number of characters in a commit id.
pub const COMMIT_ID_LEN: usize = 16;

/// Truncated content hash: `HASH_LEN` lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Parse a hash from its hex form, rejecting anything that is not `HASH_LEN` hex digits.
    pub fn parse(s: &str) -> Result<Self, StorageError> {
        let valid = s.len() == HASH_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(StorageError::InvalidHash(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Build a hash from the leading bytes of a full digest.
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(&digest[..HASH_LEN / 2]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContentHash {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical repository-relative path used as the key of every path table.
///
/// Always forward-slash separated and NFC normalized, never absolute, never
/// containing `.` or `..` components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoPath(String);

impl RepoPath {
    /// Parse a user-supplied relative path into its canonical form.
    pub fn parse(s: &str) -> Result<Self, StorageError> {
        path::normalize_repo_path(s).map(Self)
    }

    /// Derive the key for a file found under `root`.
    ///
    /// Names that would not map back to the same file are rejected: non-UTF-8
    /// names, and names containing `\` where it is not a separator.
    pub fn from_fs_path(root: &Path, file: &Path) -> Result<Self, StorageError> {
        let relative = file.strip_prefix(root).map_err(|_| {
            StorageError::InvalidPath(format!("{:?} is outside repository {:?}", file, root))
        })?;
        let relative = relative.to_str().ok_or_else(|| {
            StorageError::InvalidPath(format!("{:?} is not valid UTF-8", relative))
        })?;
        if cfg!(not(windows)) && relative.contains('\\') {
            return Err(StorageError::InvalidPath(format!(
                "{:?} contains a backslash in a file name",
                relative
            )));
        }
        Self::parse(relative)
    }

    /// Resolve this key to a location on disk under `root`.
    pub fn to_fs_path(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, c| acc.join(c))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Components of the path, outermost first.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl TryFrom<String> for RepoPath {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RepoPath> for String {
    fn from(path: RepoPath) -> Self {
        path.0
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Random commit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh `COMMIT_ID_LEN` character token.
    pub fn generate() -> Self {
        let token = uuid::Uuid::new_v4().simple().to_string();
        Self(token[..COMMIT_ID_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
