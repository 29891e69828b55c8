//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name used in log fields (e.g. "info").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Info(_) => "info",
    }
}

/// `<name> <version>` line printed after the root help.
pub fn version_line(command: &clap::Command) -> String {
    format!(
        "{} {}",
        command.get_name(),
        command.get_version().unwrap_or(env!("CARGO_PKG_VERSION"))
    )
}
