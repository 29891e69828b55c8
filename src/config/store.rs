//! Hierarchical key/value store with colon-delimited keys.

use crate::error::AppError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Separator between key path segments.
pub const KEY_DELIMITER: char = ':';

/// Read-only view of hierarchical configuration.
pub trait ConfigStore: Send + Sync {
    /// Value stored at `key`, if the key holds a scalar.
    fn get(&self, key: &str) -> Option<String>;

    /// Full paths of the direct children of `section` (`""` is the root).
    fn children(&self, section: &str) -> Vec<String>;

    /// Whether `key` is a genuine entry: its parent section must have a direct
    /// child whose last segment is the key's leaf.
    fn contains_key(&self, key: &str) -> bool {
        let (parent, leaf) = split_key(key);
        if leaf.trim().is_empty() {
            return false;
        }
        self.children(parent)
            .iter()
            .any(|child| split_key(child).1.eq_ignore_ascii_case(leaf))
    }
}

/// Split `key` into its parent path and leaf segment.
pub fn split_key(key: &str) -> (&str, &str) {
    match key.rfind(KEY_DELIMITER) {
        Some(index) => (&key[..index], &key[index + 1..]),
        None => ("", key),
    }
}

/// Join path segments with the key delimiter.
pub fn join_key(segments: &[&str]) -> String {
    segments.join(&KEY_DELIMITER.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    path: String,
    value: Option<String>,
}

/// Configuration store built from layered JSON-shaped documents.
///
/// Leaves are kept flat under their lower-cased path so lookups ignore case;
/// a later layer replaces any leaf an earlier one set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    entries: BTreeMap<String, Entry>,
    sources: Vec<PathBuf>,
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a single JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid configuration JSON: {}", e)))?;
        let mut settings = Self::new();
        settings.merge_value(&value);
        Ok(settings)
    }

    /// Merge a document on top of the current contents.
    pub fn merge_value(&mut self, value: &Value) {
        self.flatten(String::new(), value);
    }

    /// Record that a file contributed to this store.
    pub fn add_source(&mut self, path: &Path) {
        self.sources.push(path.to_path_buf());
    }

    /// Files merged into this store, lowest precedence first.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Set a single leaf.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(
            key.to_ascii_lowercase(),
            Entry {
                path: key.to_string(),
                value: Some(value.into()),
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flatten(&mut self, prefix: String, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.flatten(child_path(&prefix, key), child);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.flatten(child_path(&prefix, &index.to_string()), child);
                }
            }
            scalar if !prefix.is_empty() => {
                let value = match scalar {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
                self.entries.insert(
                    prefix.to_ascii_lowercase(),
                    Entry {
                        path: prefix,
                        value,
                    },
                );
            }
            _ => {}
        }
    }
}

fn child_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", prefix, KEY_DELIMITER, segment)
    }
}

impl ConfigStore for AppSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .and_then(|entry| entry.value.clone())
    }

    fn children(&self, section: &str) -> Vec<String> {
        let section = section.trim_end_matches(KEY_DELIMITER);
        let prefix = if section.is_empty() {
            String::new()
        } else {
            format!("{}{}", section.to_ascii_lowercase(), KEY_DELIMITER)
        };

        let mut seen = Vec::<String>::new();
        let mut children = Vec::new();
        for (lowered, entry) in self.entries.range(prefix.clone()..) {
            if !lowered.starts_with(&prefix) {
                break;
            }
            let Some(segment) = entry.path[prefix.len()..].split(KEY_DELIMITER).next() else {
                continue;
            };
            let lowered_segment = segment.to_ascii_lowercase();
            if seen.contains(&lowered_segment) {
                continue;
            }
            seen.push(lowered_segment);
            children.push(child_path(section, segment));
        }
        children
    }
}
