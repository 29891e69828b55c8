//! CLI route: dispatches the parsed command to its handler.

use crate::app::AppContext;
use crate::cli::help::{command_name, version_line};
use crate::cli::output::exit_code;
use crate::cli::parse::{Cli, Commands};
use crate::cli::surface::subcommand_option_set;
use crate::commands::{InfoCommand, Invocation, Invoke};
use crate::error::AppError;
use crate::resolve::ResolutionContext;
use clap::{ArgMatches, CommandFactory};
use tracing::{error, info};

/// Routing state for one process run.
pub struct RunContext<'a> {
    app: &'a AppContext,
}

impl<'a> RunContext<'a> {
    pub fn new(app: &'a AppContext) -> Self {
        Self { app }
    }

    /// Run the parsed command and return the process exit code.
    ///
    /// Without a subcommand the root help is printed followed by the name and
    /// version line.
    pub async fn execute(&self, cli: &Cli, matches: &ArgMatches) -> Result<i32, AppError> {
        let mut root = Cli::command();
        let Some(command) = &cli.command else {
            root.print_help()?;
            println!();
            println!("{}", version_line(&root));
            return Ok(exit_code::SUCCESS);
        };

        let options = subcommand_option_set(&mut root, matches);
        let ctx = ResolutionContext::new(&options, Some(&self.app.settings));
        let name = command_name(command);
        info!(command = name, "Executing command");

        let invocation = match command {
            Commands::Info(_) => {
                let mut command = InfoCommand::from_store(&self.app.settings);
                command.invoke(ctx, self.app).await?
            }
        };

        Ok(match invocation {
            Invocation::Completed(code) => {
                info!(command = name, code, "Command completed");
                code
            }
            Invocation::ValidationFailed { component } => {
                error!(command = name, component, "Validation failed; command not run");
                exit_code::VALIDATION_FAILED
            }
        })
    }
}
