//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file,
//! the repository's `.tig/config.toml`, then `TIG__SECTION__KEY` environment
//! overrides. An explicit config file replaces both file layers.

use crate::error::TigError;
use crate::history::DEFAULT_LOG_LIMIT;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TigConfig {
    /// Command behavior
    #[serde(default)]
    pub core: CoreConfig,

    /// Working-tree scanning
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Commits shown by `log` when no count is given
    #[serde(default = "default_log_limit")]
    pub log_limit: usize,

    /// Context lines around each diff hunk
    #[serde(default = "default_diff_context")]
    pub diff_context: usize,

    /// Colorize status and diff output on terminals
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Working-tree scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Skip files whose name has no `.`
    #[serde(default = "default_true")]
    pub require_extension: bool,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_log_limit() -> usize {
    DEFAULT_LOG_LIMIT
}

fn default_diff_context() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_limit: default_log_limit(),
            diff_context: default_diff_context(),
            color: default_true(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            require_extension: default_true(),
            follow_symlinks: false,
        }
    }
}

impl TigConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), TigError> {
        if self.core.log_limit == 0 {
            return Err(TigError::ConfigError(
                "core.log_limit must be at least 1".to_string(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(TigError::ConfigError(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}
