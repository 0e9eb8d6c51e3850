//! CLI route: single route table and run context. Dispatches to the repository and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_add_result, format_checkout_summary, format_commit_result, format_diff,
    format_init_summary, format_log_json, format_log_text, format_status_json,
    format_status_text,
};
use crate::config::{ConfigLoader, TigConfig};
use crate::error::TigError;
use crate::repository::Repository;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// Runtime context for CLI execution: repository root and config source.
pub struct RunContext {
    repo_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RunContext {
    pub fn new(repo_root: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            repo_root,
            config_path,
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Load configuration for this run. An explicit file replaces the file layers.
    pub fn load_config(&self) -> Result<TigConfig, TigError> {
        match self.config_path {
            Some(ref path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(&self.repo_root),
        }
    }

    /// Execute a command and return the text for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, TigError> {
        let span = info_span!("command", name = command_name(command));
        let _entered = span.enter();

        match command {
            Commands::Init { path } => {
                let target = path.as_deref().unwrap_or(self.repo_root.as_path());
                Ok(format_init_summary(&Repository::init(target)?))
            }
            Commands::Add { path } => {
                let (repo, _) = self.open()?;
                Ok(format_add_result(&repo.add(path)?))
            }
            Commands::Commit { message } => {
                let (repo, _) = self.open()?;
                Ok(format_commit_result(&repo.commit(message)?))
            }
            Commands::Log { limit, format } => {
                let (repo, _) = self.open()?;
                let commits = repo.log(*limit)?;
                match format {
                    OutputFormat::Text => Ok(format_log_text(&commits)),
                    OutputFormat::Json => format_log_json(&commits),
                }
            }
            Commands::Status { format } => {
                let (repo, color) = self.open()?;
                let report = repo.status()?;
                match format {
                    OutputFormat::Text => Ok(format_status_text(&report, color)),
                    OutputFormat::Json => format_status_json(&report),
                }
            }
            Commands::Checkout { commit_id } => {
                let (repo, _) = self.open()?;
                Ok(format_checkout_summary(&repo.checkout(commit_id)?))
            }
            Commands::Diff { path, commit } => {
                let (repo, color) = self.open()?;
                let diff = match commit {
                    Some(id) => repo.diff_against(path, id)?,
                    None => repo.diff(path)?,
                };
                Ok(format_diff(&diff, color))
            }
        }
    }

    /// Open the repository; the flag says whether output may be colored.
    fn open(&self) -> Result<(Repository, bool), TigError> {
        let config = self.load_config()?;
        let color = config.core.color && std::io::stdout().is_terminal();
        let repo = Repository::open(&self.repo_root, config)?;
        debug!(root = %repo.root().display(), "opened repository for command");
        Ok((repo, color))
    }
}
