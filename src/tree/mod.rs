//! Working tree access
//!
//! Path normalization, content hashing and the sorted, ignore-aware walk over
//! the files under a repository root.

pub mod hasher;
pub mod path;
pub mod walker;
