//! Environment variable source: `CONSOLE_TEMPLATE__<Section>__<Key>`.

use crate::app::ENV_PREFIX;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Separator between the prefix and the key, and between key segments.
pub const ENV_SEPARATOR: &str = "__";

pub fn builder() -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR),
    )
}
