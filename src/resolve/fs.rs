//! Directory and file validation.

use crate::app::base_directory;
use crate::error::ResolveError;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// An absolute path produced by the filesystem validators.
///
/// When a failure is ignored the validator still hands back the path it was
/// working with, marked as not existing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    exists: bool,
}

impl ResolvedPath {
    fn confirmed(path: PathBuf) -> Self {
        let path = dunce::canonicalize(&path).unwrap_or(path);
        Self { path, exists: true }
    }

    fn partial(path: PathBuf) -> Self {
        Self {
            path,
            exists: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the path was confirmed on disk.
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Make `path` absolute against the working directory and drop `.`/`..`
/// components lexically.
pub fn full_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve `path` to a directory.
///
/// An absent path defaults to the base directory when `create_if_missing` is
/// set. A missing directory is created when `create_if_missing` is set and is
/// `DirectoryNotFound` otherwise. With `ignore_failures` set, a failure after
/// the path was known returns that path marked as not existing; a failure
/// before it was known returns `None`.
pub fn resolve_directory(
    path: Option<&str>,
    create_if_missing: bool,
    ignore_failures: bool,
) -> Result<Option<ResolvedPath>, ResolveError> {
    let target = match (non_blank(path), create_if_missing) {
        (Some(p), _) => PathBuf::from(p),
        (None, true) if path.is_none() => base_directory(),
        _ => {
            let err = ResolveError::MissingValue("directory path".to_string());
            if ignore_failures {
                debug!(error = %err, "ignoring directory failure");
                return Ok(None);
            }
            return Err(err);
        }
    };

    let full = full_path(&target);
    let outcome = if full.is_dir() {
        Ok(ResolvedPath::confirmed(full.clone()))
    } else if create_if_missing {
        std::fs::create_dir_all(&full)
            .map(|_| ResolvedPath::confirmed(full.clone()))
            .map_err(|source| ResolveError::Io {
                path: full.clone(),
                source,
            })
    } else {
        Err(ResolveError::DirectoryNotFound(full.clone()))
    };

    match outcome {
        Ok(resolved) => Ok(Some(resolved)),
        Err(err) if ignore_failures => {
            debug!(error = %err, "ignoring directory failure");
            Ok(Some(ResolvedPath::partial(full)))
        }
        Err(err) => Err(err),
    }
}

/// Resolve `name` to a file.
///
/// `name` is first taken as given (absolute or relative to the working
/// directory) and accepted when it exists or its containing directory exists.
/// Otherwise it is joined onto `directory` (default: the base directory) and
/// that path must exist.
pub fn resolve_file(
    name: Option<&str>,
    directory: Option<&str>,
    ignore_failures: bool,
) -> Result<Option<ResolvedPath>, ResolveError> {
    let Some(name) = non_blank(name) else {
        let err = ResolveError::MissingValue("file name".to_string());
        if ignore_failures {
            debug!(error = %err, "ignoring file failure");
            return Ok(None);
        }
        return Err(err);
    };

    let direct = full_path(Path::new(name));
    if direct.is_file() {
        return Ok(Some(ResolvedPath::confirmed(direct)));
    }
    if direct.parent().map_or(false, Path::is_dir) {
        return Ok(Some(ResolvedPath::partial(direct)));
    }

    let base = non_blank(directory)
        .map(PathBuf::from)
        .unwrap_or_else(base_directory);
    let composed = full_path(&base.join(name));
    if composed.is_file() {
        return Ok(Some(ResolvedPath::confirmed(composed)));
    }

    let err = ResolveError::FileNotFound(composed.clone());
    if ignore_failures {
        debug!(error = %err, "ignoring file failure");
        Ok(Some(ResolvedPath::partial(composed)))
    } else {
        Err(err)
    }
}
