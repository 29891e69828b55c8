//! Configuration System
//!
//! Layered application settings read into a case-insensitive, colon-keyed
//! store. Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. user file in the platform config directory
//! 3. `<app>.appsettings.json` beside the executable, then in the working directory
//! 4. `<app>.appsettings.<Environment>.json` in the same places
//! 5. an explicit file passed with `--config` (required when given)
//! 6. `CONSOLE_TEMPLATE__<Section>__<Key>` environment variables

mod merge;
mod sources;
mod store;

pub use store::{join_key, split_key, AppSettings, ConfigStore, KEY_DELIMITER};

use crate::app::base_directory;
use crate::error::AppError;
use config::File;
use merge::merge_policy::{apply_layer, builder_with_defaults};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key holding the configured logs directory.
pub const APP_SETTINGS_LOGS_DIRECTORY: &str = "AppSettings:LogsDirectory";

/// Section under which each command's settings live.
pub const COMMANDS_SECTION: &str = "Commands";

pub const LOGGING_LEVEL: &str = "Logging:Level";
pub const LOGGING_FORMAT: &str = "Logging:Format";
pub const LOGGING_OUTPUT: &str = "Logging:Output";
pub const LOGGING_COLOR: &str = "Logging:Color";

/// `Commands:<command>:<property>`
pub fn command_key(command: &str, property: &str) -> String {
    join_key(&[COMMANDS_SECTION, command, property])
}

/// Loads [`AppSettings`] from every configured layer.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    directories: Vec<PathBuf>,
    user_file: Option<PathBuf>,
    environment: String,
    explicit: Option<PathBuf>,
    read_environment: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let mut directories = vec![base_directory()];
        if let Ok(cwd) = std::env::current_dir() {
            directories.push(cwd);
        }
        Self {
            directories,
            user_file: sources::user_file::user_config_path(),
            environment: sources::base_file::environment_name(),
            explicit: None,
            read_environment: true,
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load with process defaults plus an optional explicit file.
    pub fn load(explicit: Option<&Path>) -> Result<AppSettings, AppError> {
        Self::new().with_explicit_file(explicit).build()
    }

    /// Directories searched for application files, lowest precedence first.
    pub fn with_directories(mut self, directories: Vec<PathBuf>) -> Self {
        self.directories = directories;
        self
    }

    pub fn with_user_file(mut self, path: Option<PathBuf>) -> Self {
        self.user_file = path;
        self
    }

    pub fn with_environment_name(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_explicit_file(mut self, path: Option<&Path>) -> Self {
        self.explicit = path.map(Path::to_path_buf);
        self
    }

    pub fn with_environment_variables(mut self, enabled: bool) -> Self {
        self.read_environment = enabled;
        self
    }

    pub fn build(&self) -> Result<AppSettings, AppError> {
        let mut settings = AppSettings::new();

        apply_layer(&mut settings, builder_with_defaults()?, None)?;

        if let Some((builder, path)) = sources::user_file::builder(self.user_file.clone()) {
            debug!(config_path = %path.display(), "Loading user configuration");
            apply_layer(&mut settings, builder, Some(&path))?;
        }

        for path in sources::base_file::candidate_files(&self.directories, &self.environment) {
            debug!(config_path = %path.display(), "Loading application configuration");
            apply_layer(&mut settings, sources::base_file::builder(&path), Some(&path))?;
        }

        if let Some(explicit) = &self.explicit {
            if !explicit.is_file() {
                return Err(AppError::Config(format!(
                    "Configuration file not found: {}",
                    explicit.display()
                )));
            }
            let path = dunce::canonicalize(explicit).unwrap_or_else(|_| explicit.clone());
            let builder =
                config::Config::builder().add_source(File::from(path.clone()).required(true));
            apply_layer(&mut settings, builder, Some(&path))?;
        }

        if self.read_environment {
            apply_layer(&mut settings, sources::environment::builder(), None)?;
        }

        Ok(settings)
    }
}
