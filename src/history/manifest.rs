//! Per-commit manifests
//!
//! One CSV file per commit, named by the commit timestamp zero-padded to a
//! fixed width so lexicographic and chronological order agree. The first row
//! is the `filename,hash` header.

use crate::error::StorageError;
use crate::store::document::write_atomic;
use crate::types::{ContentHash, RepoPath};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: [&str; 2] = ["filename", "hash"];
const EXTENSION: &str = "csv";

/// Path/hash table recorded alongside a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub timestamp: i64,
    pub entries: Vec<(RepoPath, ContentHash)>,
}

impl Manifest {
    pub fn get(&self, path: &RepoPath) -> Option<&ContentHash> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, hash)| hash)
    }

    /// Render as CSV text, quoting fields that need it.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_row(&mut out, &HEADER);
        for (path, hash) in &self.entries {
            push_row(&mut out, &[path.as_str(), hash.as_str()]);
        }
        out
    }

    /// Parse CSV text written by `to_csv`.
    pub fn from_csv(timestamp: i64, text: &str) -> Result<Self, String> {
        let mut rows = parse_rows(text)?.into_iter();
        match rows.next() {
            Some(header) if header == HEADER => {}
            other => return Err(format!("unexpected header row: {:?}", other)),
        }

        let mut entries = Vec::new();
        for row in rows {
            let [path, hash]: [String; 2] = row
                .try_into()
                .map_err(|row: Vec<String>| format!("expected 2 fields, got {}", row.len()))?;
            let path = RepoPath::parse(&path).map_err(|e| e.to_string())?;
            let hash = ContentHash::parse(&hash).map_err(|e| e.to_string())?;
            entries.push((path, hash));
        }
        Ok(Self { timestamp, entries })
    }
}

/// Directory of manifests keyed by timestamp
pub struct ManifestStore {
    dir: PathBuf,
}

impl ManifestStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, timestamp: i64) -> PathBuf {
        self.dir.join(format!("{:010}.{}", timestamp, EXTENSION))
    }

    pub fn exists(&self, timestamp: i64) -> bool {
        self.path_for(timestamp).exists()
    }

    pub fn write(&self, manifest: &Manifest) -> Result<(), StorageError> {
        write_atomic(&self.path_for(manifest.timestamp), manifest.to_csv().as_bytes())
    }

    /// Used only to roll back a commit that failed after its manifest was written.
    pub(crate) fn remove(&self, timestamp: i64) -> Result<(), StorageError> {
        fs::remove_file(self.path_for(timestamp))?;
        Ok(())
    }

    pub fn read(&self, timestamp: i64) -> Result<Option<Manifest>, StorageError> {
        let path = self.path_for(timestamp);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Manifest::from_csv(timestamp, &text)
            .map(Some)
            .map_err(|reason| StorageError::CorruptDocument { path, reason })
    }

    /// All manifest timestamps, oldest first.
    pub fn keys(&self) -> Result<Vec<i64>, StorageError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some(key) = manifest_key(&path) {
                keys.push(key);
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }

    /// The most recently written manifest, if any.
    pub fn latest(&self) -> Result<Option<Manifest>, StorageError> {
        match self.keys()?.last() {
            Some(&key) => self.read(key),
            None => Ok(None),
        }
    }
}

fn manifest_key(path: &Path) -> Option<i64> {
    if path.extension()? != EXTENSION {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, String> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                c => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            c => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}
