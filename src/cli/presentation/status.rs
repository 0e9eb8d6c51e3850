//! Status presentation: table or json.

use super::to_pretty_json;
use crate::error::TigError;
use crate::status::{FileState, StatusReport};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;

fn state_color(state: FileState) -> Color {
    match state {
        FileState::Committed => Color::Green,
        FileState::Staged => Color::Cyan,
        FileState::ModifiedNotStaged => Color::Yellow,
        FileState::Untracked => Color::Red,
    }
}

pub fn format_status_text(report: &StatusReport, color: bool) -> String {
    if report.entries.is_empty() {
        return "No files found in the working tree.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(vec!["Path", "State"]);
    for entry in &report.entries {
        let state = Cell::new(entry.state.as_str());
        let state = if color {
            state.fg(state_color(entry.state))
        } else {
            state
        };
        table.add_row(vec![Cell::new(entry.path.as_str()), state]);
    }

    let summary = format!(
        "{} committed, {} staged, {} modified, {} untracked",
        report.count(FileState::Committed),
        report.count(FileState::Staged),
        report.count(FileState::ModifiedNotStaged),
        report.count(FileState::Untracked),
    );
    let summary = if color {
        format!("{}", summary.bold())
    } else {
        summary
    };
    format!("{}\n{}", table, summary)
}

pub fn format_status_json(report: &StatusReport) -> Result<String, TigError> {
    to_pretty_json(report)
}
