//! End-to-end add / commit workflows

use std::fs;
use tig::stage::AddOutcome;
use tig::store::ContentStore;
use tig::tree::hasher::compute_content_hash;
use tig::TigError;

use crate::integration::{commit_at, open_repo};

#[test]
fn test_first_commit_scenario() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    let h1 = compute_content_hash(b"hello");

    let added = repo.add("a.txt").unwrap();
    assert_eq!(added.outcome, AddOutcome::Added);
    let stage = repo.stage().unwrap();
    assert_eq!(stage.len(), 1);
    assert_eq!(stage.entries()[0].path().as_str(), "a.txt");
    assert_eq!(stage.entries()[0].hash(), &h1);

    let commit = commit_at(&repo, "first", 1_700_000_000);
    assert_eq!(commit.message, "first");
    assert_eq!(commit.files.len(), 1);
    assert_eq!(commit.files.values().next(), Some(&h1));
    assert_eq!(repo.store().get(&h1).unwrap().as_deref(), Some(&b"hello"[..]));
    assert!(repo.stage().unwrap().is_empty());

    let log = repo.log(None).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].id, commit.id);
}

#[test]
fn test_readding_unchanged_file_is_noop() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();

    let stage_file = repo.layout().stage_file();
    let before = fs::read(&stage_file).unwrap();
    let modified_before = fs::metadata(&stage_file).unwrap().modified().unwrap();

    let again = repo.add("a.txt").unwrap();
    assert_eq!(again.outcome, AddOutcome::AlreadyStaged);
    assert_eq!(fs::read(&stage_file).unwrap(), before);
    assert_eq!(
        fs::metadata(&stage_file).unwrap().modified().unwrap(),
        modified_before
    );
}

#[test]
fn test_readding_changed_file_updates_in_place() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "one").unwrap();
    fs::write(temp.path().join("b.txt"), "two").unwrap();
    repo.add("a.txt").unwrap();
    repo.add("b.txt").unwrap();

    fs::write(temp.path().join("a.txt"), "one, revised").unwrap();
    assert_eq!(repo.add("a.txt").unwrap().outcome, AddOutcome::Updated);

    let stage = repo.stage().unwrap();
    let paths: Vec<_> = stage.entries().iter().map(|e| e.path().as_str()).collect();
    assert_eq!(paths, vec!["a.txt", "b.txt"]);
    assert_eq!(
        stage.entries()[0].hash(),
        &compute_content_hash(b"one, revised")
    );
}

#[test]
fn test_identical_content_is_stored_once() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "same").unwrap();
    fs::create_dir_all(temp.path().join("docs")).unwrap();
    fs::write(temp.path().join("docs/copy.txt"), "same").unwrap();

    repo.add("a.txt").unwrap();
    repo.add("docs/copy.txt").unwrap();
    commit_at(&repo, "first", 1_700_000_000);
    repo.add("a.txt").unwrap();
    commit_at(&repo, "second", 1_700_000_100);

    assert_eq!(repo.store().list().unwrap().len(), 1);
}

#[test]
fn test_commit_with_empty_stage_fails() {
    let (_temp, repo) = open_repo();
    let err = repo.commit("nothing").unwrap_err();
    assert!(matches!(err, TigError::NothingStaged));
    assert!(!repo.layout().commits_file().exists());
}

#[test]
fn test_add_missing_file_is_not_found() {
    let (_temp, repo) = open_repo();
    let err = repo.add("ghost.txt").unwrap_err();
    assert!(matches!(err, TigError::FileNotFound(_)));
    assert!(repo.stage().unwrap().is_empty());
}

#[test]
fn test_timestamp_collision_keeps_stage() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();
    commit_at(&repo, "first", 1_700_000_000);

    fs::write(temp.path().join("a.txt"), "hello again").unwrap();
    repo.add("a.txt").unwrap();
    let now = chrono::TimeZone::timestamp_opt(&chrono::Utc, 1_700_000_000, 0).unwrap();
    let err = repo.commit_at("second", now).unwrap_err();
    assert!(matches!(err, TigError::TimestampCollision(1_700_000_000)));

    assert_eq!(repo.stage().unwrap().len(), 1);
    assert_eq!(repo.log(None).unwrap().len(), 1);
}

#[test]
fn test_commit_refuses_stale_stage_when_blob_is_gone() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();

    let h1 = compute_content_hash(b"hello");
    fs::remove_file(repo.store().blob_path(&h1)).unwrap();
    fs::write(temp.path().join("a.txt"), "edited after add").unwrap();

    let err = repo.commit("first").unwrap_err();
    assert!(matches!(err, TigError::StaleStage(_)));
    assert_eq!(repo.stage().unwrap().len(), 1);
    assert!(repo.history().manifests().keys().unwrap().is_empty());
}

#[test]
fn test_commit_recopies_missing_blob_when_file_unchanged() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();

    let h1 = compute_content_hash(b"hello");
    fs::remove_file(repo.store().blob_path(&h1)).unwrap();

    commit_at(&repo, "first", 1_700_000_000);
    assert!(repo.store().contains(&h1).unwrap());
}

#[test]
fn test_lock_released_after_each_mutation() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();
    assert!(!repo.layout().lock_file().exists());
    commit_at(&repo, "first", 1_700_000_000);
    assert!(!repo.layout().lock_file().exists());
}
