//! Configuration fallback for option values.

use crate::config::ConfigStore;
use crate::error::ResolveError;

/// Pick the command-line value, or fall back to `key` in `store`.
///
/// A non-blank `cli_value` always wins. Without a usable key there is no
/// fallback. A key that is not a genuine entry of the store is
/// `ConfigKeyNotFound`: a fallback key that the configuration does not
/// declare is an authoring mistake, not an unset value. A blank configured
/// value reads as absent.
pub fn resolve_with_fallback(
    cli_value: Option<&str>,
    store: Option<&dyn ConfigStore>,
    key: Option<&str>,
) -> Result<Option<String>, ResolveError> {
    if let Some(value) = cli_value.filter(|v| !v.trim().is_empty()) {
        return Ok(Some(value.to_string()));
    }

    let Some(key) = key.filter(|k| !k.trim().is_empty()) else {
        return Ok(None);
    };
    let Some(store) = store else {
        return Ok(None);
    };

    if !store.contains_key(key) {
        return Err(ResolveError::ConfigKeyNotFound(key.to_string()));
    }

    Ok(store.get(key).filter(|v| !v.trim().is_empty()))
}
