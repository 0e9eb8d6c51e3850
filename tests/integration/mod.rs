//! Integration tests for the tig version control system

mod checkout_restore;
mod config_integration;
mod init_command;
mod log_history;
mod test_utils;
mod workflow;

pub use test_utils::{commit_at, open_repo, with_env, with_xdg_env};
