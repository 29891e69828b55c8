//! CLI domain: parse, option-set extraction, route, help, and output only.
//! Commands do their own resolution; the route table hands them the option
//! set of the invoked subcommand.

mod help;
mod output;
mod parse;
mod route;
mod surface;

pub use help::{command_name, version_line};
pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands, InfoArgs};
pub use route::RunContext;
pub use surface::{option_kind, option_set, subcommand_option_set};
