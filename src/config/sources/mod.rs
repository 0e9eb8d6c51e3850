//! Config file and environment sources.

pub mod global_file;
pub mod repo_file;
