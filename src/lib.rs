//! Tig: minimal single-repository version control
//!
//! Files are hashed into a content-addressed object store, staged, and
//! recorded as immutable commits with one manifest per commit. Status, diff
//! and checkout read that history back against the working tree.

pub mod checkout;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod history;
pub mod ignore;
pub mod logging;
pub mod repository;
pub mod stage;
pub mod status;
pub mod store;
pub mod tree;
pub mod types;

pub use error::{ErrorKind, StorageError, TigError};
pub use repository::Repository;
