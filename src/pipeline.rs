//! Validation pipeline.
//!
//! A command validates by running an ordered list of [`ValidationStep`]s over
//! one [`ResolutionContext`]. Steps run in the order they were added, so a
//! command that puts the shared base step first cannot skip it. The first
//! failing step stops the pass; its error is logged with the full message
//! chain and reported as [`ValidationState::Failed`]. Errors never escape
//! [`Pipeline::run`].

mod change_log;

pub use change_log::{ChangeLog, ChangeRecord};

use crate::error::{error_chain, inner_message, ResolveError};
use crate::resolve::ResolutionContext;
use tracing::{info, warn};

/// One stage of a command's validation.
pub trait ValidationStep: Send {
    /// Name used in log output and as the change-log header.
    fn component(&self) -> &'static str;

    /// Resolve this step's options, storing accepted values on `self` and
    /// recording each in `changes`.
    fn resolve(
        &mut self,
        ctx: &ResolutionContext<'_>,
        changes: &mut ChangeLog,
    ) -> Result<(), ResolveError>;
}

#[derive(Debug)]
pub enum ValidationState {
    Unvalidated,
    Validated,
    Failed {
        component: &'static str,
        error: ResolveError,
    },
}

/// Outcome of a pass plus the change logs of every step that succeeded.
#[derive(Debug)]
pub struct ValidationReport {
    pub state: ValidationState,
    pub change_logs: Vec<ChangeLog>,
}

impl ValidationReport {
    pub fn is_validated(&self) -> bool {
        matches!(self.state, ValidationState::Validated)
    }

    /// Component of the failing step, if any.
    pub fn failed_component(&self) -> Option<&'static str> {
        match &self.state {
            ValidationState::Failed { component, .. } => Some(*component),
            _ => None,
        }
    }
}

/// Ordered validation steps.
#[derive(Default)]
pub struct Pipeline<'s> {
    steps: Vec<&'s mut dyn ValidationStep>,
}

impl<'s> Pipeline<'s> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn then(mut self, step: &'s mut dyn ValidationStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn run(self, ctx: &ResolutionContext<'_>) -> ValidationReport {
        let mut report = ValidationReport {
            state: ValidationState::Unvalidated,
            change_logs: Vec::with_capacity(self.steps.len()),
        };

        for step in self.steps {
            let component = step.component();
            info!(component, "Validate {}", component);

            let mut changes = ChangeLog::new(component);
            if let Err(error) = step.resolve(ctx, &mut changes) {
                warn!(
                    component,
                    error = %error,
                    inner = %inner_message(&error),
                    "{} Validation Error: {}",
                    component,
                    error_chain(&error)
                );
                report.state = ValidationState::Failed { component, error };
                return report;
            }

            info!(component, changes = ?changes.records(), "{}", changes);
            report.change_logs.push(changes);
        }

        report.state = ValidationState::Validated;
        report
    }
}
