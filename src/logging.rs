//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format, and
//! destinations come from configuration (`Logging:*`) and are overridden by
//! command-line flags. Every run writes to its own timestamped log file.

use crate::app::{APP_NAME, ENV_PREFIX};
use crate::config::{ConfigStore, LOGGING_COLOR, LOGGING_FORMAT, LOGGING_LEVEL, LOGGING_OUTPUT};
use crate::error::AppError;
use crate::resolve::parse_bool;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Log file timestamp, `yyyy-MM-dd-HHmmssfff`.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                s
            ))),
        }
    }
}

/// Where log events go. `Both` is the console plus the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    File,
    Both,
}

impl LogOutput {
    fn stdout(self) -> bool {
        matches!(self, LogOutput::Stdout | LogOutput::Both)
    }

    fn stderr(self) -> bool {
        matches!(self, LogOutput::Stderr)
    }

    fn file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::Both)
    }
}

impl FromStr for LogOutput {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            "file" => Ok(LogOutput::File),
            "both" => Ok(LogOutput::Both),
            _ => Err(AppError::Logging(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', or 'both')",
                s
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive: trace, debug, info, warn, error, off
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Colored console output (text format only)
    pub color: bool,
    pub file: PathBuf,
}

impl LoggingConfig {
    /// Read `Logging:*` from the store. Missing keys keep their defaults.
    pub fn from_store(store: &dyn ConfigStore, file: PathBuf) -> Result<Self, AppError> {
        let mut config = Self {
            file,
            ..Self::default()
        };
        if let Some(level) = store.get(LOGGING_LEVEL).filter(|l| !l.trim().is_empty()) {
            config.level = level.trim().to_ascii_lowercase();
        }
        if let Some(format) = store.get(LOGGING_FORMAT) {
            config.format = format.parse()?;
        }
        if let Some(output) = store.get(LOGGING_OUTPUT) {
            config.output = output.parse()?;
        }
        config.color = parse_bool(store.get(LOGGING_COLOR).as_deref(), config.color);
        Ok(config)
    }

    /// Apply `--log-level`, `--verbose`, and `--quiet`. An explicit level wins.
    pub fn apply_cli(&mut self, level: Option<&str>, verbose: bool, quiet: bool) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level.trim().to_ascii_lowercase();
        } else if verbose {
            self.level = "debug".to_string();
        } else if quiet {
            self.level = "error".to_string();
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: LogOutput::Both,
            color: true,
            file: log_file_path(None, Local::now()),
        }
    }
}

/// Log file for a run starting at `now`.
///
/// A non-blank `logs_directory` holds the file; otherwise it goes under
/// `<temp>/<app>/`.
pub fn log_file_path(logs_directory: Option<&str>, now: DateTime<Local>) -> PathBuf {
    let name = format!("{}-{}.log", APP_NAME, now.format(FILE_TIMESTAMP_FORMAT));
    match logs_directory.filter(|d| !d.trim().is_empty()) {
        Some(dir) => Path::new(dir.trim()).join(name),
        None => std::env::temp_dir().join(APP_NAME).join(name),
    }
}

/// Initialize the global subscriber.
///
/// `CONSOLE_TEMPLATE_LOG` (EnvFilter syntax) overrides the configured level.
/// Installing a second subscriber in the same process is an error.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = build_env_filter(config)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if config.output.stdout() {
        layers.push(layer(config.format, config.color, std::io::stdout));
    }
    if config.output.stderr() {
        layers.push(layer(config.format, config.color, std::io::stderr));
    }
    if config.output.file() {
        let file = open_log_file(&config.file)?;
        layers.push(layer(config.format, false, Mutex::new(file)));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn layer<W>(format: LogFormat, ansi: bool, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    match format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Text => base.with_ansi(ansi).boxed(),
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File, AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Logging(format!("Failed to create log directory {}: {}", parent.display(), e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logging(format!("Failed to open log file {}: {}", path.display(), e)))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, AppError> {
    if let Ok(filter) = EnvFilter::try_from_env(format!("{}_LOG", ENV_PREFIX)) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| AppError::Logging(format!("Invalid log level '{}': {}", config.level, e)))
}
