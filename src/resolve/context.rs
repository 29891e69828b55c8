//! Shared state for one resolution pass.

use crate::config::ConfigStore;
use crate::error::{FailureKind, ResolveError};
use crate::resolve::fallback::resolve_with_fallback;
use crate::resolve::options::{OptionId, OptionRegistry, OptionSet};
use tracing::debug;

/// Options and configuration every validation step of a pass reads from.
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    options: &'a OptionSet,
    store: Option<&'a dyn ConfigStore>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(options: &'a OptionSet, store: Option<&'a dyn ConfigStore>) -> Self {
        Self { options, store }
    }

    pub fn options(&self) -> &'a OptionSet {
        self.options
    }

    pub fn store(&self) -> Option<&'a dyn ConfigStore> {
        self.store
    }

    /// Bind a command's option identifiers for this pass.
    pub fn bind<K: OptionId>(&self, ids: &[K]) -> Result<OptionRegistry<'a, K>, ResolveError> {
        OptionRegistry::bind(self.options, ids)
    }

    /// Command-line value, else the configured value under `key`.
    ///
    /// With `ignore_failures` set, a missing configuration key reads as
    /// absent instead of failing the step.
    pub fn fallback(
        &self,
        cli_value: Option<&str>,
        key: &str,
        ignore_failures: bool,
    ) -> Result<Option<String>, ResolveError> {
        match resolve_with_fallback(cli_value, self.store, Some(key)) {
            Err(err) if ignore_failures && err.kind() == FailureKind::ConfigKeyNotFound => {
                debug!(key, error = %err, "no configured fallback");
                Ok(None)
            }
            other => other,
        }
    }
}
