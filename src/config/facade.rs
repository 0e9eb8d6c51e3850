//! Config facade: the single entry point for loading `TigConfig`.

use super::merge::merge_policy;
use super::sources::{global_file, repo_file};
use super::TigConfig;
use crate::error::TigError;
use config::{Environment, File};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix; keys use `__` between sections, e.g. `TIG__CORE__LOG_LIMIT`.
const ENV_PREFIX: &str = "TIG";
const ENV_SEPARATOR: &str = "__";

/// Loads configuration from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the repository at `repo_root`.
    ///
    /// Precedence (lowest to highest): defaults, global file, repository file, environment.
    pub fn load(repo_root: &Path) -> Result<TigConfig, TigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = repo_file::add_to_builder(builder, repo_root)?;
        let config: TigConfig = builder
            .add_source(env_source())
            .build()?
            .try_deserialize()?;
        config.validate()?;
        debug!(repo_root = %repo_root.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file, still honoring environment overrides.
    pub fn load_from_file(path: &Path) -> Result<TigConfig, TigError> {
        if !path.is_file() {
            return Err(TigError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config: TigConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
