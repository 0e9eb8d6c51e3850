//! Filesystem-backed Content Store

use crate::error::StorageError;
use crate::store::document::write_atomic;
use crate::store::ContentStore;
use crate::tree::hasher::compute_content_hash;
use crate::types::ContentHash;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Content-addressed blob storage
///
/// Stores blobs on the filesystem using a fan-out path structure:
/// `{root}/{hex[0..2]}/{hash}`
///
/// Each blob file is named by its hash and holds the raw bytes, so the same
/// content referenced by many paths or commits is stored exactly once.
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    /// Create a new store rooted at the objects directory, creating it if needed
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to create objects directory at {:?}: {}", root, e),
            ))
        })?;
        Ok(Self { root })
    }

    /// Get the root path of this storage
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the filesystem path for a given hash
    pub fn blob_path(&self, hash: &ContentHash) -> PathBuf {
        let hex = hash.as_str();
        self.root.join(&hex[0..2]).join(hex)
    }

    /// Every stored blob hash, in no particular order
    pub fn list(&self) -> Result<Vec<ContentHash>, StorageError> {
        let mut hashes = Vec::new();
        for fanout in fs::read_dir(&self.root)? {
            let fanout = fanout?;
            if !fanout.file_type()?.is_dir() {
                continue;
            }
            for blob in fs::read_dir(fanout.path())? {
                let name = blob?.file_name();
                if let Ok(hash) = ContentHash::parse(&name.to_string_lossy()) {
                    hashes.push(hash);
                }
            }
        }
        Ok(hashes)
    }
}

impl ContentStore for FsContentStore {
    fn put(&self, bytes: &[u8]) -> Result<ContentHash, StorageError> {
        let hash = compute_content_hash(bytes);
        let blob_path = self.blob_path(&hash);

        if blob_path.exists() {
            debug!(hash = %hash, "blob already stored");
            return Ok(hash);
        }

        write_atomic(&blob_path, bytes)?;
        debug!(hash = %hash, size = bytes.len(), "stored blob");
        Ok(hash)
    }

    fn get(&self, hash: &ContentHash) -> Result<Option<Vec<u8>>, StorageError> {
        let blob_path = self.blob_path(hash);
        if !blob_path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&blob_path).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to read blob from {:?}: {}", blob_path, e),
            ))
        })?;
        Ok(Some(bytes))
    }

    fn contains(&self, hash: &ContentHash) -> Result<bool, StorageError> {
        Ok(self.blob_path(hash).exists())
    }
}
