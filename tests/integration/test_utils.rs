//! Shared test utilities for integration tests
//!
//! Repository fixtures plus serialized access to process environment
//! variables, which are global state shared by every test in the binary.

use chrono::{TimeZone, Utc};
use std::sync::Mutex;
use tempfile::TempDir;
use tig::config::TigConfig;
use tig::history::Commit;
use tig::Repository;

/// Serializes environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Initialize a repository in a fresh temp dir and open it with default config.
pub fn open_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    let repo = Repository::open(temp.path(), TigConfig::default()).unwrap();
    (temp, repo)
}

/// Commit with a fixed clock so manifest keys are predictable.
pub fn commit_at(repo: &Repository, message: &str, seconds: i64) -> Commit {
    let now = Utc.timestamp_opt(seconds, 0).unwrap();
    repo.commit_at(message, now).unwrap()
}

/// Run `f` with the given variables set, restoring previous values afterwards.
pub fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    for (key, value) in saved {
        match value {
            Some(v) => std::env::set_var(&key, v),
            None => std::env::remove_var(&key),
        }
    }
    result
}

/// Point XDG_CONFIG_HOME and HOME into `test_dir` for the duration of `f`.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let config_home = test_dir.path().to_str().unwrap().to_string();
    let home = home.to_str().unwrap().to_string();
    with_env(
        &[("XDG_CONFIG_HOME", config_home.as_str()), ("HOME", home.as_str())],
        f,
    )
}
