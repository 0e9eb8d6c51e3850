//! Shared presentation: confirmations for init, add and checkout.

use crate::repository::{AddResult, CheckoutSummary, InitSummary, STATE_DIR};
use crate::stage::AddOutcome;

pub fn format_init_summary(summary: &InitSummary) -> String {
    let state_dir = summary.root.join(STATE_DIR);
    if summary.created_state_dir {
        format!("Initialized empty repository in {}", state_dir.display())
    } else {
        format!("Reinitialized existing repository in {}", state_dir.display())
    }
}

pub fn format_add_result(result: &AddResult) -> String {
    match result.outcome {
        AddOutcome::Added => format!("the file {} was added to the staged state", result.path),
        AddOutcome::Updated => format!("the file {} was updated in the staged state", result.path),
        AddOutcome::AlreadyStaged => {
            format!("the file {} is already in the staged state", result.path)
        }
    }
}

pub fn format_checkout_summary(summary: &CheckoutSummary) -> String {
    format!(
        "Checked out commit {}. {} file(s) restored to the working directory.",
        summary.commit.id,
        summary.restored.len()
    )
}
