//! History presentation: commit confirmation and log listings.

use super::to_pretty_json;
use crate::error::TigError;
use crate::history::Commit;
use serde_json::json;

pub fn format_commit_result(commit: &Commit) -> String {
    format!(
        "Commit '{}' is completed with ID {} ({} file(s))",
        commit.message,
        commit.id,
        commit.files.len()
    )
}

pub fn format_log_text(commits: &[Commit]) -> String {
    if commits.is_empty() {
        return "No commits found.".to_string();
    }
    let mut out = String::from("Commit History:\n");
    for (i, commit) in commits.iter().enumerate() {
        out.push_str(&format!("\n{}. Commit ID: {}\n", i + 1, commit.id));
        out.push_str(&format!("   Date: {}\n", commit.date));
        out.push_str(&format!("   Message: {}\n", commit.message));
    }
    out
}

pub fn format_log_json(commits: &[Commit]) -> Result<String, TigError> {
    let entries: Vec<_> = commits
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "date": c.date,
                "message": c.message,
                "timestamp": c.timestamp,
                "files": c.files,
            })
        })
        .collect();
    to_pretty_json(&json!({ "commits": entries }))
}
