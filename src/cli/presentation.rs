//! CLI presentation: text and json formatters per command family.

mod diff;
mod history;
mod shared;
mod status;

pub use diff::format_diff;
pub use history::{format_commit_result, format_log_json, format_log_text};
pub use shared::{format_add_result, format_checkout_summary, format_init_summary};
pub use status::{format_status_json, format_status_text};

use crate::error::{StorageError, TigError};
use serde::Serialize;

pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, TigError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| TigError::StorageError(StorageError::Serialization(e.to_string())))
}
