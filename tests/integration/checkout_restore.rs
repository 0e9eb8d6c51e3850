//! Checkout restores committed content byte for byte

use std::fs;
use tig::tree::hasher::compute_content_hash;
use tig::TigError;

use crate::integration::{commit_at, open_repo};

#[test]
fn test_checkout_round_trip() {
    let (temp, repo) = open_repo();
    let original = b"line one\nline two\n\x00binary tail";
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/main.rs"), original).unwrap();
    fs::write(temp.path().join("notes.md"), "draft").unwrap();
    repo.add("src/main.rs").unwrap();
    repo.add("notes.md").unwrap();
    let commit = commit_at(&repo, "snapshot", 1_700_000_000);

    fs::write(temp.path().join("src/main.rs"), "rewritten").unwrap();
    fs::remove_file(temp.path().join("notes.md")).unwrap();

    let summary = repo.checkout(commit.id.as_str()).unwrap();
    assert_eq!(summary.restored.len(), 2);
    assert_eq!(fs::read(temp.path().join("src/main.rs")).unwrap(), original);
    assert_eq!(fs::read_to_string(temp.path().join("notes.md")).unwrap(), "draft");
    assert!(!repo.layout().lock_file().exists());
}

#[test]
fn test_checkout_older_commit_leaves_untracked_files() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "v1").unwrap();
    repo.add("a.txt").unwrap();
    let first = commit_at(&repo, "v1", 1_700_000_000);

    fs::write(temp.path().join("a.txt"), "v2").unwrap();
    repo.add("a.txt").unwrap();
    commit_at(&repo, "v2", 1_700_000_100);
    fs::write(temp.path().join("extra.txt"), "keep me").unwrap();

    repo.checkout(first.id.as_str()).unwrap();
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "v1");
    assert_eq!(fs::read_to_string(temp.path().join("extra.txt")).unwrap(), "keep me");
}

#[test]
fn test_checkout_before_any_commit_fails() {
    let (_temp, repo) = open_repo();
    let err = repo.checkout("deadbeefdeadbeef").unwrap_err();
    assert!(matches!(err, TigError::NoCommits));
}

#[test]
fn test_checkout_unknown_id_is_not_found() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();
    commit_at(&repo, "first", 1_700_000_000);

    let err = repo.checkout("not-a-commit").unwrap_err();
    assert!(matches!(err, TigError::CommitNotFound(ref id) if id == "not-a-commit"));
}

#[test]
fn test_checkout_missing_blob_is_not_found() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();
    let commit = commit_at(&repo, "first", 1_700_000_000);

    let hash = compute_content_hash(b"hello");
    fs::remove_file(repo.store().blob_path(&hash)).unwrap();

    let err = repo.checkout(commit.id.as_str()).unwrap_err();
    assert!(matches!(err, TigError::BlobNotFound(ref h) if h == &hash));
}

#[test]
fn test_checkout_keeps_untracked_tmp_sibling() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    repo.add("a.txt").unwrap();
    let commit = commit_at(&repo, "first", 1_700_000_000);

    fs::write(temp.path().join("a.txt"), "edited").unwrap();
    fs::write(temp.path().join("a.txt.tmp"), "user data").unwrap();

    repo.checkout(commit.id.as_str()).unwrap();
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "hello");
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt.tmp")).unwrap(),
        "user data"
    );
}
