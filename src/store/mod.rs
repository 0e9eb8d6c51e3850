//! Content Store
//!
//! Deduplicating storage for immutable file content, addressed by the
//! truncated BLAKE3 hash of the bytes. Also owns the read-only `scan`
//! primitive that hashes the working tree without storing anything.

pub mod document;
pub mod persistence;

pub use persistence::FsContentStore;

use crate::error::StorageError;
use crate::tree::hasher;
use crate::tree::walker::Walker;
use crate::types::{ContentHash, RepoPath};

/// Content Store interface
pub trait ContentStore {
    /// Persist `bytes` if no blob exists for their hash. Never overwrites.
    fn put(&self, bytes: &[u8]) -> Result<ContentHash, StorageError>;

    /// Fetch a blob, `None` if it was never stored.
    fn get(&self, hash: &ContentHash) -> Result<Option<Vec<u8>>, StorageError>;

    fn contains(&self, hash: &ContentHash) -> Result<bool, StorageError>;
}

/// Hash every file the walker yields, lazily and without touching any store.
pub fn scan(
    walker: &Walker,
) -> impl Iterator<Item = Result<(RepoPath, ContentHash), StorageError>> + '_ {
    walker.files().map(|entry| {
        let entry = entry?;
        let hash = hasher::hash_file(&entry.location)?;
        Ok((entry.path, hash))
    })
}
