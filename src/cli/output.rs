//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ErrorKind, TigError};

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &TigError) -> String {
    match e.kind() {
        ErrorKind::PreconditionFailed => format!("Error: Precondition failed: {}", e),
        ErrorKind::NotFound => format!("Error: Not found: {}", e),
        ErrorKind::Storage | ErrorKind::Config => format!("Error: {}", e),
    }
}

/// Every failure is fatal with the same status.
pub fn exit_code(_e: &TigError) -> i32 {
    1
}
