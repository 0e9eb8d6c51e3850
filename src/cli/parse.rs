//! CLI parse: clap types for tig. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tig - a minimal single-repository version control system
#[derive(Parser)]
#[command(name = "tig")]
#[command(about = "Track, commit and restore files in a single local repository")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository root directory
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the repository state directory
    Init {
        /// Repository root (defaults to --repo)
        path: Option<PathBuf>,
    },
    /// Stage a file
    Add {
        /// File path, relative to the repository root
        path: String,
    },
    /// Record the staged files as a new commit
    Commit {
        /// Commit message
        message: String,
    },
    /// Show the most recent commits, newest first
    Log {
        /// Number of commits, written as `-N` or `N`
        #[arg(allow_negative_numbers = true, value_parser = parse_log_limit)]
        limit: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Classify every file in the working tree
    Status {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Restore the files recorded by a commit
    Checkout {
        /// Commit id as printed by `commit` or `log`
        commit_id: String,
    },
    /// Compare a working file against its last recorded version
    Diff {
        /// File path, relative to the repository root
        path: String,
        /// Compare against this commit instead of the latest manifest
        #[arg(long)]
        commit: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Accepts `-3` as well as `3`; zero is rejected.
pub fn parse_log_limit(raw: &str) -> Result<usize, String> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    match digits.parse::<usize>() {
        Ok(0) => Err("count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid commit count: {}", raw)),
    }
}
