//! CLI help: stable command names for log events.

use crate::cli::parse::Commands;

/// Command name recorded on the command span (e.g. "add", "log").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Add { .. } => "add",
        Commands::Commit { .. } => "commit",
        Commands::Log { .. } => "log",
        Commands::Status { .. } => "status",
        Commands::Checkout { .. } => "checkout",
        Commands::Diff { .. } => "diff",
    }
}
