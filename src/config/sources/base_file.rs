//! Application config files: `<app>.appsettings.json` and
//! `<app>.appsettings.<Environment>.json` beside the executable and in the
//! working directory.

use crate::app::{APP_NAME, ENV_PREFIX};
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::{Path, PathBuf};

/// Environment name: `CONSOLE_TEMPLATE_ENVIRONMENT`, else the build profile.
pub fn environment_name() -> String {
    std::env::var(format!("{}_ENVIRONMENT", ENV_PREFIX))
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(debug_assertions) {
                "Debug".to_string()
            } else {
                "Release".to_string()
            }
        })
}

pub fn base_file_name() -> String {
    format!("{}.appsettings.json", APP_NAME)
}

pub fn environment_file_name(environment: &str) -> String {
    format!("{}.appsettings.{}.json", APP_NAME, environment)
}

/// Existing application files, lowest precedence first.
///
/// Base files from every directory come before any environment file.
pub fn candidate_files(directories: &[PathBuf], environment: &str) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::new();
    for dir in directories {
        let dir = dunce::canonicalize(dir).unwrap_or_else(|_| dir.clone());
        if !unique.contains(&dir) {
            unique.push(dir);
        }
    }

    let names = [base_file_name(), environment_file_name(environment)];
    names
        .iter()
        .flat_map(|name| unique.iter().map(move |dir| dir.join(name)))
        .filter(|path| path.is_file())
        .collect()
}

/// Builder holding a single application file.
pub fn builder(path: &Path) -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(File::from(path.to_path_buf()).required(false))
}
