//! Content hashing using BLAKE3

use crate::error::StorageError;
use crate::types::ContentHash;
use blake3::Hasher;
use std::fs::File;
use std::io;
use std::path::Path;

/// Compute content hash for file bytes
///
/// The digest is truncated to `HASH_LEN` hex characters.
pub fn compute_content_hash(content: &[u8]) -> ContentHash {
    let mut hasher = Hasher::new();
    hasher.update(content);
    ContentHash::from_digest(hasher.finalize().as_bytes())
}

/// Hash a file on disk without loading it into memory at once
pub fn hash_file(path: &Path) -> Result<ContentHash, StorageError> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(ContentHash::from_digest(hasher.finalize().as_bytes()))
}
