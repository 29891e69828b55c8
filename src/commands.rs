//! Commands: validation steps plus the run step each command performs once
//! validation succeeds.

mod base;
mod info;

pub use base::{BaseOption, BaseStep};
pub use info::{InfoCommand, InfoOption, InfoStep, INFO_SECTION};

use crate::app::AppContext;
use crate::error::AppError;
use crate::resolve::ResolutionContext;
use async_trait::async_trait;

/// Result of invoking a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Validation passed and the command ran to this exit code.
    Completed(i32),
    /// Validation failed in `component`; the command did not run.
    ValidationFailed { component: &'static str },
}

/// A command that validates its options and then runs.
#[async_trait]
pub trait Invoke: Send {
    async fn invoke(
        &mut self,
        ctx: ResolutionContext<'_>,
        app: &AppContext,
    ) -> Result<Invocation, AppError>;
}
