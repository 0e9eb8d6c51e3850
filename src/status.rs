//! Status Engine
//!
//! Read-only comparison of the working tree against the stage and the folded
//! commit history. Every scanned file receives exactly one state.

use crate::error::StorageError;
use crate::history::Commit;
use crate::stage::Stage;
use crate::types::{ContentHash, RepoPath};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Classification of a working-tree file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileState {
    Committed,
    Staged,
    ModifiedNotStaged,
    Untracked,
}

impl FileState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileState::Committed => "committed",
            FileState::Staged => "staged",
            FileState::ModifiedNotStaged => "modified-not-staged",
            FileState::Untracked => "untracked",
        }
    }
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub path: RepoPath,
    pub state: FileState,
}

/// Status of the whole working tree, sorted by path
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusReport {
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    pub fn state_of(&self, path: &RepoPath) -> Option<FileState> {
        self.entries
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.state)
    }

    pub fn count(&self, state: FileState) -> usize {
        self.entries.iter().filter(|e| e.state == state).count()
    }
}

/// Last known committed hash per path.
///
/// Commits are folded oldest first so later commits win. A path dropped from
/// a later commit keeps its older hash; deletions are never represented.
pub fn fold_committed(commits: &[Commit]) -> BTreeMap<RepoPath, ContentHash> {
    let mut folded = BTreeMap::new();
    for commit in commits {
        for (path, hash) in &commit.files {
            folded.insert(path.clone(), hash.clone());
        }
    }
    folded
}

/// Classify a single file. The first matching rule wins, so a file that is
/// both committed and staged at the same hash reports as committed.
pub fn classify(
    path: &RepoPath,
    hash: &ContentHash,
    committed: &BTreeMap<RepoPath, ContentHash>,
    stage: &Stage,
) -> FileState {
    let last_committed = committed.get(path);
    if last_committed == Some(hash) {
        FileState::Committed
    } else if stage.contains(path, hash) {
        FileState::Staged
    } else if last_committed.is_some() {
        FileState::ModifiedNotStaged
    } else {
        FileState::Untracked
    }
}

/// Build the report from scanned (path, hash) pairs.
pub fn compute<I>(scanned: I, stage: &Stage, commits: &[Commit]) -> Result<StatusReport, StorageError>
where
    I: IntoIterator<Item = Result<(RepoPath, ContentHash), StorageError>>,
{
    let committed = fold_committed(commits);
    let mut entries = Vec::new();
    for item in scanned {
        let (path, hash) = item?;
        let state = classify(&path, &hash, &committed, stage);
        entries.push(StatusEntry { path, state });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(StatusReport { entries })
}
