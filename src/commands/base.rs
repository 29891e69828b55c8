//! Options shared by every command.

use crate::config::APP_SETTINGS_LOGS_DIRECTORY;
use crate::error::ResolveError;
use crate::pipeline::{ChangeLog, ValidationStep};
use crate::resolve::{resolve_directory, OptionId, ResolutionContext, ResolvedPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseOption {
    LogsDirectory,
}

impl BaseOption {
    pub const ALL: [BaseOption; 1] = [BaseOption::LogsDirectory];
}

impl OptionId for BaseOption {
    fn property(&self) -> &'static str {
        match self {
            BaseOption::LogsDirectory => "LogsDirectory",
        }
    }
}

/// Resolves the logs directory from `--logs-directory` or
/// `AppSettings:LogsDirectory`. The directory is never created here; an
/// unusable value is kept as a path marked not existing.
#[derive(Debug, Default)]
pub struct BaseStep {
    logs_directory: Option<ResolvedPath>,
}

impl BaseStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logs_directory(&self) -> Option<&ResolvedPath> {
        self.logs_directory.as_ref()
    }
}

impl ValidationStep for BaseStep {
    fn component(&self) -> &'static str {
        "BaseCommand"
    }

    fn resolve(
        &mut self,
        ctx: &ResolutionContext<'_>,
        changes: &mut ChangeLog,
    ) -> Result<(), ResolveError> {
        let options = ctx.bind(&BaseOption::ALL)?;
        let id = BaseOption::LogsDirectory;

        let raw = ctx.fallback(options.value(id), APP_SETTINGS_LOGS_DIRECTORY, true)?;
        self.logs_directory = match raw {
            Some(raw) => resolve_directory(Some(&raw), false, true)?,
            None => None,
        };

        changes.record_opt(id.property(), self.logs_directory.as_ref());
        Ok(())
    }
}
