//! Integration tests for the layered configuration

use std::fs;
use tempfile::TempDir;
use tig::config::{global_config_path, ConfigLoader};
use tig::{Repository, TigError};

use crate::integration::{with_env, with_xdg_env};

#[test]
fn test_repo_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let xdg = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    fs::write(
        temp.path().join(".tig/config.toml"),
        "[core]\nlog_limit = 2\n\n[scan]\nrequire_extension = false\n",
    )
    .unwrap();

    let config = with_xdg_env(&xdg, || ConfigLoader::load(temp.path())).unwrap();
    assert_eq!(config.core.log_limit, 2);
    assert!(!config.scan.require_extension);
    assert_eq!(config.core.diff_context, 3);
}

#[test]
fn test_global_file_is_below_repo_file() {
    let temp = TempDir::new().unwrap();
    let xdg = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    fs::create_dir_all(xdg.path().join("tig")).unwrap();
    fs::write(
        xdg.path().join("tig/config.toml"),
        "[core]\nlog_limit = 9\ndiff_context = 1\n",
    )
    .unwrap();
    fs::write(temp.path().join(".tig/config.toml"), "[core]\nlog_limit = 4\n").unwrap();

    let config = with_xdg_env(&xdg, || {
        assert_eq!(
            global_config_path().unwrap(),
            xdg.path().join("tig/config.toml")
        );
        ConfigLoader::load(temp.path())
    })
    .unwrap();
    assert_eq!(config.core.log_limit, 4);
    assert_eq!(config.core.diff_context, 1);
}

#[test]
fn test_environment_overrides_files() {
    let temp = TempDir::new().unwrap();
    let xdg = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    fs::write(temp.path().join(".tig/config.toml"), "[core]\nlog_limit = 4\n").unwrap();
    let home = xdg.path().to_str().unwrap().to_string();

    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", home.as_str()),
            ("TIG__CORE__LOG_LIMIT", "7"),
        ],
        || ConfigLoader::load(temp.path()),
    )
    .unwrap();
    assert_eq!(config.core.log_limit, 7);
}

#[test]
fn test_explicit_file_must_exist_and_validate() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::load_from_file(&missing),
        Err(TigError::ConfigError(_))
    ));

    let invalid = temp.path().join("invalid.toml");
    fs::write(&invalid, "[core]\nlog_limit = 0\n").unwrap();
    assert!(matches!(
        ConfigLoader::load_from_file(&invalid),
        Err(TigError::ConfigError(_))
    ));

    let valid = temp.path().join("valid.toml");
    fs::write(&valid, "[core]\ncolor = false\n").unwrap();
    let config = with_env(&[], || ConfigLoader::load_from_file(&valid)).unwrap();
    assert!(!config.core.color);
}

#[test]
fn test_repo_config_changes_scan_behavior() {
    let temp = TempDir::new().unwrap();
    let xdg = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    fs::write(
        temp.path().join(".tig/config.toml"),
        "[scan]\nrequire_extension = false\n",
    )
    .unwrap();
    fs::write(temp.path().join("Makefile"), "all:").unwrap();

    let config = with_xdg_env(&xdg, || ConfigLoader::load(temp.path())).unwrap();
    let repo = Repository::open(temp.path(), config).unwrap();
    let report = repo.status().unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].path.as_str(), "Makefile");
}
