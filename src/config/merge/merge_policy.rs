//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("core.log_limit", 5_i64)?
        .set_default("core.diff_context", 3_i64)?
        .set_default("core.color", true)?
        .set_default("scan.require_extension", true)?
        .set_default("scan.follow_symlinks", false)
}
