//! User config file source: `appsettings.json` in the platform config directory.

use crate::app::APP_NAME;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the user-level settings file.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join("appsettings.json"))
}

/// Builder holding the user file, or `None` when there is no such file.
pub fn builder(path: Option<PathBuf>) -> Option<(ConfigBuilder<DefaultState>, PathBuf)> {
    let path = path?;
    if !path.is_file() {
        debug!(
            config_path = %path.display(),
            "No user configuration file; continuing without user-level settings"
        );
        return None;
    }
    let path = dunce::canonicalize(&path).unwrap_or(path);
    let builder = config::Config::builder().add_source(File::from(path.clone()).required(false));
    Some((builder, path))
}
