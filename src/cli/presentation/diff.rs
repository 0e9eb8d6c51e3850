//! Diff presentation: unified diff with optional coloring.

use crate::diff::DiffReport;
use crate::repository::FileDiff;
use owo_colors::OwoColorize;

pub fn format_diff(diff: &FileDiff, color: bool) -> String {
    let rendered = diff.report.render();
    if !color {
        return rendered;
    }
    match diff.report {
        DiffReport::Text { .. } => rendered
            .lines()
            .map(colorize_line)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => rendered,
    }
}

fn colorize_line(line: &str) -> String {
    if line.starts_with("+++") || line.starts_with("---") {
        format!("{}", line.bold())
    } else if line.starts_with("@@") {
        format!("{}", line.cyan())
    } else if line.starts_with('+') {
        format!("{}", line.green())
    } else if line.starts_with('-') {
        format!("{}", line.red())
    } else {
        line.to_string()
    }
}
