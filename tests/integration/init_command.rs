//! Repository initialization

use std::fs;
use tempfile::TempDir;
use tig::config::TigConfig;
use tig::repository::RepoLayout;
use tig::{Repository, TigError};

#[test]
fn test_init_creates_missing_root_and_state_dirs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nested/repo");

    let summary = Repository::init(&root).unwrap();
    assert!(summary.created_root);
    assert!(summary.created_state_dir);

    let layout = RepoLayout::new(summary.root.clone());
    assert!(layout.state_dir().is_dir());
    assert!(layout.objects_dir().is_dir());
    assert!(layout.manifests_dir().is_dir());
    assert!(!layout.commits_file().exists());
    assert!(!layout.stage_file().exists());
}

#[test]
fn test_reinit_preserves_history() {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    let repo = Repository::open(temp.path(), TigConfig::default()).unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();
    repo.commit("first").unwrap();

    let summary = Repository::init(temp.path()).unwrap();
    assert!(!summary.created_state_dir);
    assert_eq!(repo.log(None).unwrap().len(), 1);
}

#[test]
fn test_open_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    let err = Repository::open(&temp.path().join("nope"), TigConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, TigError::RepositoryRootMissing(_)));
    assert_eq!(err.kind(), tig::ErrorKind::PreconditionFailed);
}
