//! Ignore list for scan, status and add.
//!
//! The ignore list lives at `.tig/.tigignore`, one pattern per line. Blank lines
//! and lines starting with `#` are skipped. A pattern matches a repository path
//! when it equals the whole path or one of its components, or names a
//! directory (with or without a trailing `/`) that contains the path. The state directory and `.git` are
//! always ignored.

use crate::error::StorageError;
use crate::types::RepoPath;
use std::fs;
use std::path::Path;

/// Built-in ignore patterns.
const BUILTIN_DEFAULTS: &[&str] = &[".tig", ".git"];

/// Parsed ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<String>,
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self {
            patterns: BUILTIN_DEFAULTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl IgnoreList {
    /// Load the ignore file, falling back to the built-in defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let mut list = Self::default();
        if !path.is_file() {
            return Ok(list);
        }
        let contents = fs::read_to_string(path)?;
        list.extend(parse_patterns(&contents));
        Ok(list)
    }

    /// Add patterns on top of the current set.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, patterns: I) {
        self.patterns.extend(patterns);
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check a repository path against every pattern.
    pub fn is_ignored(&self, path: &RepoPath) -> bool {
        self.matches(path.as_str())
    }

    /// Check a normalized relative path string (file or directory).
    pub(crate) fn matches(&self, relative: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            let dir = pattern.strip_suffix('/').unwrap_or(pattern);
            let inside = relative
                .strip_prefix(dir)
                .is_some_and(|rest| rest.starts_with('/'));
            if pattern.ends_with('/') {
                relative == dir || inside
            } else {
                relative == dir || inside || relative.split('/').any(|c| c == dir)
            }
        })
    }
}

/// Minimal parse: trim, skip empty and `#` lines, strip a leading `./`.
fn parse_patterns(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_start_matches("./").to_string())
        .collect()
}
