//! Diff Engine
//!
//! Line-level comparison between a recorded blob and the live working file,
//! rendered as a unified diff. Which recorded version is used (the latest
//! manifest or a named commit) is decided by the caller.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

/// Message reported instead of an empty diff.
pub const NO_DIFFERENCE: &str = "There is no difference in the file and the previous version.";

/// Message reported when either side is not text.
pub const BINARY_DIFFERS: &str = "Binary files differ.";

/// Rendering options
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Number of unchanged lines shown around each change
    pub context_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { context_lines: 3 }
    }
}

/// Outcome of comparing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffReport {
    Identical,
    Binary,
    Text {
        unified: String,
        lines_added: usize,
        lines_removed: usize,
    },
}

impl DiffReport {
    pub fn is_identical(&self) -> bool {
        matches!(self, DiffReport::Identical)
    }

    /// Plain-text rendering; never empty.
    pub fn render(&self) -> String {
        match self {
            DiffReport::Identical => NO_DIFFERENCE.to_string(),
            DiffReport::Binary => BINARY_DIFFERS.to_string(),
            DiffReport::Text { unified, .. } => unified.clone(),
        }
    }
}

/// Compare `recorded` against `working` for the file named `label`.
pub fn diff_contents(label: &str, recorded: &[u8], working: &[u8], options: &DiffOptions) -> DiffReport {
    if recorded == working {
        return DiffReport::Identical;
    }

    let (old, new) = match (text_of(recorded), text_of(working)) {
        (Some(old), Some(new)) => (old, new),
        _ => return DiffReport::Binary,
    };

    let diff = TextDiff::from_lines(old, new);
    let mut lines_added = 0;
    let mut lines_removed = 0;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => lines_added += 1,
            ChangeTag::Delete => lines_removed += 1,
            ChangeTag::Equal => {}
        }
    }

    let unified = diff
        .unified_diff()
        .context_radius(options.context_lines)
        .header(&format!("Committed: {}", label), &format!("Working: {}", label))
        .to_string();

    DiffReport::Text {
        unified,
        lines_added,
        lines_removed,
    }
}

/// Content counts as text when it is valid UTF-8 without NUL bytes.
fn text_of(bytes: &[u8]) -> Option<&str> {
    if bytes.contains(&0) {
        return None;
    }
    std::str::from_utf8(bytes).ok()
}
