//! Error types for option resolution, configuration, and process bootstrap.

use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds a resolver can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MissingValue,
    InvalidFormat,
    DirectoryNotFound,
    FileNotFound,
    OptionNotFound,
    ConfigKeyNotFound,
    UriFormatInvalid,
    /// Malformed option declarations and I/O failures while creating paths.
    Internal,
}

/// Resolution and validation errors
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Value cannot be empty or whitespace: {0}")]
    MissingValue(String),

    #[error("Invalid {expected} value: '{value}'")]
    InvalidFormat { expected: &'static str, value: String },

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Option not found: {0}")]
    OptionNotFound(String),

    #[error("{0} has no value")]
    OptionHasNoValue(String),

    #[error("Option declared without a long name")]
    InvalidOptionName,

    #[error("Configuration key not found: {0}")]
    ConfigKeyNotFound(String),

    #[error("Invalid URI from {source_tag}: '{value}'")]
    UriFormatInvalid {
        source_tag: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to create directory {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::MissingValue(_) | ResolveError::OptionHasNoValue(_) => {
                FailureKind::MissingValue
            }
            ResolveError::InvalidFormat { .. } => FailureKind::InvalidFormat,
            ResolveError::DirectoryNotFound(_) => FailureKind::DirectoryNotFound,
            ResolveError::FileNotFound(_) => FailureKind::FileNotFound,
            ResolveError::OptionNotFound(_) => FailureKind::OptionNotFound,
            ResolveError::ConfigKeyNotFound(_) => FailureKind::ConfigKeyNotFound,
            ResolveError::UriFormatInvalid { .. } => FailureKind::UriFormatInvalid,
            ResolveError::InvalidOptionName | ResolveError::Io { .. } => FailureKind::Internal,
        }
    }
}

/// Application-level errors raised while bootstrapping or running a command
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("{0} is already initialized")]
    AlreadyInitialized(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Render an error and every `source()` below it as one line.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut current = err.source();
    while let Some(inner) = current {
        rendered.push_str(": ");
        rendered.push_str(&inner.to_string());
        current = inner.source();
    }
    rendered
}

/// Message of the innermost cause, or an empty string when there is none.
pub fn inner_message(err: &(dyn StdError + 'static)) -> String {
    let mut current = err.source();
    let mut last = None;
    while let Some(inner) = current {
        last = Some(inner);
        current = inner.source();
    }
    last.map(|e| e.to_string()).unwrap_or_default()
}
