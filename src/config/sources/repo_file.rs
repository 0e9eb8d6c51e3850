//! Repository config file source: <root>/.tig/config.toml

use crate::repository::layout::RepoLayout;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Add the repository config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    repo_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = RepoLayout::new(repo_root.to_path_buf()).config_file();
    if path.exists() {
        return Ok(builder.add_source(File::from(path).required(false)));
    }
    Ok(builder)
}
