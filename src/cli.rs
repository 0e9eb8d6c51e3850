//! CLI domain: parse, route, help, output, and presentation only.
//! Commands are dispatched to the `Repository` handle; no state lives here.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error};
pub use parse::{parse_log_limit, Cli, Commands, OutputFormat};
pub use presentation::{
    format_add_result, format_checkout_summary, format_commit_result, format_diff,
    format_init_summary, format_log_json, format_log_text, format_status_json,
    format_status_text,
};
pub use route::RunContext;
