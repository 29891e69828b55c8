//! Process-wide application context.
//!
//! Built once at startup from the loaded configuration and the computed log
//! path, then handed by reference to routing and commands.

use crate::config::AppSettings;
use crate::error::AppError;
use chrono::{DateTime, Local};
use once_cell::sync::{Lazy, OnceCell};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "console-template";

/// Prefix for environment variables read by the application.
pub const ENV_PREFIX: &str = "CONSOLE_TEMPLATE";

static CONTEXT: OnceCell<AppContext> = OnceCell::new();

static BUILD: Lazy<BuildInfo> = Lazy::new(BuildInfo::detect);

/// Name, version and build date of the running executable.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_date: Option<DateTime<Local>>,
}

impl BuildInfo {
    pub fn current() -> &'static BuildInfo {
        &BUILD
    }

    fn detect() -> Self {
        let build_date = std::env::current_exe()
            .and_then(std::fs::metadata)
            .and_then(|meta| meta.created().or_else(|_| meta.modified()))
            .ok()
            .map(DateTime::<Local>::from);

        Self {
            name: APP_NAME,
            version: env!("CARGO_PKG_VERSION"),
            build_date,
        }
    }

    /// Build date as `yyyy-MM-dd HH:mm:ss`, or `unknown`.
    pub fn build_date_display(&self) -> String {
        self.build_date
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Directory holding the executable, or the working directory when that
/// cannot be determined.
pub fn base_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug)]
pub struct AppContext {
    pub settings: AppSettings,
    pub log_path: PathBuf,
    pub build: &'static BuildInfo,
}

impl AppContext {
    pub fn new(settings: AppSettings, log_path: PathBuf) -> Self {
        Self {
            settings,
            log_path,
            build: BuildInfo::current(),
        }
    }

    /// Make this the process context. Only the first call succeeds.
    pub fn install(self) -> Result<&'static AppContext, AppError> {
        CONTEXT
            .set(self)
            .map_err(|_| AppError::AlreadyInitialized("application context"))?;
        CONTEXT
            .get()
            .ok_or(AppError::AlreadyInitialized("application context"))
    }

    pub fn get() -> Option<&'static AppContext> {
        CONTEXT.get()
    }
}
