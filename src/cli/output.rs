//! CLI output: error mapping and process exit codes.

use crate::error::{error_chain, AppError};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Bootstrap or runtime failure.
    pub const FAILURE: i32 = 1;
    /// A validation step rejected the command's options; the command did not run.
    /// Kept apart from clap's usage error code (2).
    pub const VALIDATION_FAILED: i32 = 3;
}

/// Map application errors to a single line for CLI output.
pub fn map_error(e: &AppError) -> String {
    error_chain(e)
}
