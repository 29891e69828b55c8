//! CLI parse: clap types for console-template. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Console application template
#[derive(Parser, Debug)]
#[command(name = "console-template", version)]
#[command(about = "Console application template with layered option resolution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file layered over the default settings files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for log files (overrides AppSettings:LogsDirectory)
    #[arg(short = 'l', long, global = true)]
    pub logs_directory: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log at debug level
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// General Command Information
    Info(InfoArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct InfoArgs {
    /// Input directory (falls back to Commands:InfoCmd:InputDirectory)
    #[arg(long)]
    pub input_directory: Option<String>,

    /// Output directory (falls back to Commands:InfoCmd:OutputDirectory)
    #[arg(long)]
    pub output_directory: Option<String>,
}
