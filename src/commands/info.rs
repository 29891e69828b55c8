//! `info`: general command information.

use crate::app::AppContext;
use crate::commands::base::BaseStep;
use crate::commands::{Invocation, Invoke};
use crate::config::{command_key, ConfigStore};
use crate::error::{AppError, ResolveError};
use crate::pipeline::{ChangeLog, Pipeline, ValidationReport, ValidationStep};
use crate::resolve::{parse_bool, resolve_directory, OptionId, ResolutionContext, ResolvedPath};
use async_trait::async_trait;
use std::fmt::Write as _;
use tracing::info;

/// Configuration section holding the command's fallback values.
pub const INFO_SECTION: &str = "InfoCmd";

/// `Commands:InfoCmd:IgnoreFailures`; defaults to `true`.
const IGNORE_FAILURES: &str = "IgnoreFailures";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoOption {
    InputDirectory,
    OutputDirectory,
}

impl InfoOption {
    pub const ALL: [InfoOption; 2] = [InfoOption::InputDirectory, InfoOption::OutputDirectory];
}

impl OptionId for InfoOption {
    fn property(&self) -> &'static str {
        match self {
            InfoOption::InputDirectory => "InputDirectory",
            InfoOption::OutputDirectory => "OutputDirectory",
        }
    }
}

/// Resolves the input and output directories, creating them when missing.
#[derive(Debug)]
pub struct InfoStep {
    ignore_failures: bool,
    input_directory: Option<ResolvedPath>,
    output_directory: Option<ResolvedPath>,
}

impl Default for InfoStep {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InfoStep {
    pub fn new(ignore_failures: bool) -> Self {
        Self {
            ignore_failures,
            input_directory: None,
            output_directory: None,
        }
    }

    pub fn input_directory(&self) -> Option<&ResolvedPath> {
        self.input_directory.as_ref()
    }

    pub fn output_directory(&self) -> Option<&ResolvedPath> {
        self.output_directory.as_ref()
    }

    fn directory(
        &self,
        ctx: &ResolutionContext<'_>,
        cli_value: Option<&str>,
        id: InfoOption,
    ) -> Result<Option<ResolvedPath>, ResolveError> {
        let key = command_key(INFO_SECTION, id.property());
        match ctx.fallback(cli_value, &key, self.ignore_failures)? {
            Some(raw) => resolve_directory(Some(&raw), true, self.ignore_failures),
            None => Ok(None),
        }
    }
}

impl ValidationStep for InfoStep {
    fn component(&self) -> &'static str {
        "InfoCommand"
    }

    fn resolve(
        &mut self,
        ctx: &ResolutionContext<'_>,
        changes: &mut ChangeLog,
    ) -> Result<(), ResolveError> {
        let options = ctx.bind(&InfoOption::ALL)?;

        let input = InfoOption::InputDirectory;
        self.input_directory = self.directory(ctx, options.value(input), input)?;
        changes.record_opt(input.property(), self.input_directory.as_ref());

        let output = InfoOption::OutputDirectory;
        self.output_directory = self.directory(ctx, options.value(output), output)?;
        changes.record_opt(output.property(), self.output_directory.as_ref());

        Ok(())
    }
}

/// The `info` command: base options, then its own directories.
#[derive(Debug, Default)]
pub struct InfoCommand {
    pub base: BaseStep,
    pub info: InfoStep,
}

impl InfoCommand {
    pub fn new(ignore_failures: bool) -> Self {
        Self {
            base: BaseStep::new(),
            info: InfoStep::new(ignore_failures),
        }
    }

    /// Command configured from `Commands:InfoCmd:IgnoreFailures`.
    pub fn from_store(store: &dyn ConfigStore) -> Self {
        let key = command_key(INFO_SECTION, IGNORE_FAILURES);
        Self::new(parse_bool(store.get(&key).as_deref(), true))
    }

    pub fn validate(&mut self, ctx: &ResolutionContext<'_>) -> ValidationReport {
        Pipeline::new()
            .then(&mut self.base)
            .then(&mut self.info)
            .run(ctx)
    }

    /// Text printed by a successful run.
    pub fn render(&self, app: &AppContext) -> String {
        let mut out = String::new();
        let build = app.build;
        let _ = writeln!(out, "{} {}", build.name, build.version);
        let _ = writeln!(out, "Build date: {}", build.build_date_display());
        let _ = writeln!(out, "Log path: {}", app.log_path.display());

        if app.settings.sources().is_empty() {
            let _ = writeln!(out, "Configuration: (defaults only)");
        } else {
            let _ = writeln!(out, "Configuration:");
            for source in app.settings.sources() {
                let _ = writeln!(out, "  {}", source.display());
            }
        }

        let _ = writeln!(out, "Logs directory: {}", display_opt(self.base.logs_directory()));
        let _ = writeln!(out, "Input directory: {}", display_opt(self.info.input_directory()));
        let _ = write!(out, "Output directory: {}", display_opt(self.info.output_directory()));
        out
    }

    async fn run(&self, app: &AppContext) -> Result<i32, AppError> {
        info!(command = "info", "Running info command");
        println!("{}", self.render(app));
        Ok(0)
    }
}

fn display_opt(path: Option<&ResolvedPath>) -> String {
    match path {
        Some(path) if path.exists() => path.to_string(),
        Some(path) => format!("{} (missing)", path),
        None => "(not set)".to_string(),
    }
}

#[async_trait]
impl Invoke for InfoCommand {
    async fn invoke(
        &mut self,
        ctx: ResolutionContext<'_>,
        app: &AppContext,
    ) -> Result<Invocation, AppError> {
        let report = self.validate(&ctx);
        if let Some(component) = report.failed_component() {
            return Ok(Invocation::ValidationFailed { component });
        }
        self.run(app).await.map(Invocation::Completed)
    }
}
