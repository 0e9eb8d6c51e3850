//! Commit log ordering, limits and on-disk documents

use std::fs;
use tig::history::Manifest;
use tig::TigError;

use crate::integration::{commit_at, open_repo};

#[test]
fn test_log_before_first_commit_fails() {
    let (_temp, repo) = open_repo();
    assert!(matches!(repo.log(None), Err(TigError::NoCommits)));
}

#[test]
fn test_log_is_newest_first_and_limited() {
    let (temp, repo) = open_repo();
    for i in 0..7 {
        fs::write(temp.path().join("a.txt"), format!("version {}", i)).unwrap();
        repo.add("a.txt").unwrap();
        commit_at(&repo, &format!("commit {}", i), 1_700_000_000 + i);
    }

    let default = repo.log(None).unwrap();
    assert_eq!(default.len(), 5);
    assert_eq!(default[0].message, "commit 6");
    assert_eq!(default[4].message, "commit 2");

    let two = repo.log(Some(2)).unwrap();
    let messages: Vec<_> = two.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["commit 6", "commit 5"]);

    assert_eq!(repo.log(Some(50)).unwrap().len(), 7);
}

#[test]
fn test_commit_writes_manifest_and_log_documents() {
    let (temp, repo) = open_repo();
    fs::write(temp.path().join("b.txt"), "bee").unwrap();
    fs::write(temp.path().join("a.txt"), "ay").unwrap();
    repo.add("b.txt").unwrap();
    repo.add("a.txt").unwrap();
    let commit = commit_at(&repo, "two files", 1_700_000_000);

    let manifest_path = repo.history().manifests().path_for(1_700_000_000);
    assert!(manifest_path.ends_with("1700000000.csv"));
    let csv = fs::read_to_string(&manifest_path).unwrap();
    assert!(csv.starts_with("filename,hash"));
    let manifest = Manifest::from_csv(1_700_000_000, &csv).unwrap();
    let names: Vec<_> = manifest.entries.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(names, vec!["b.txt", "a.txt"]);

    let log: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(repo.layout().commits_file()).unwrap()).unwrap();
    assert_eq!(log[0]["id"], commit.id.as_str());
    assert_eq!(log[0]["date"], "2023-11-14 22:13:20");
    assert_eq!(log[0]["timestamp"], 1_700_000_000);
    assert_eq!(log[0]["files"]["a.txt"], commit.files.values().next().unwrap().as_str());
}

#[test]
fn test_commit_ids_are_unique() {
    let (temp, repo) = open_repo();
    let mut ids = Vec::new();
    for i in 0..10 {
        fs::write(temp.path().join("a.txt"), format!("{}", i)).unwrap();
        repo.add("a.txt").unwrap();
        ids.push(commit_at(&repo, "c", 1_700_000_000 + i).id);
    }
    let mut unique = ids.clone();
    unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}
