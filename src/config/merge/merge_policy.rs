//! Merge rules: built-in defaults and layer application.

use crate::config::AppSettings;
use crate::error::AppError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde_json::Value;
use std::path::Path;

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("Logging.Level", "info")?
        .set_default("Logging.Format", "text")?
        .set_default("Logging.Output", "both")?
        .set_default("Logging.Color", true)
}

/// Build one layer and merge it over `settings`.
///
/// Layers are built separately so each keeps its own key spelling; the store
/// matches keys without regard to case.
pub fn apply_layer(
    settings: &mut AppSettings,
    builder: ConfigBuilder<DefaultState>,
    origin: Option<&Path>,
) -> Result<(), AppError> {
    let layer: Value = builder.build()?.try_deserialize()?;
    settings.merge_value(&layer);
    if let Some(path) = origin {
        settings.add_source(path);
    }
    Ok(())
}
