//! App bundle validation and path classification.
//!
//! This module provides functionality to:
//! - Validate that a path points at an `.app` bundle
//! - Classify discovered paths by bundle suffix
//! - Walk a bundle tree and collect resigning-relevant paths
//!
//! # Overview
//!
//! A bundle is a directory identified purely by its name suffix: `.app` for
//! application bundles, `.framework` for framework bundles. Classification
//! looks at the final path component only, so a stray regular file named
//! `Foo.framework` classifies the same way the directory form does.

pub mod walker;

pub use walker::collect_paths;

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Suffix identifying an application bundle.
pub const BUNDLE_SUFFIX: &str = ".app";

/// Suffix identifying a framework bundle.
pub const FRAMEWORK_SUFFIX: &str = ".framework";

/// A discovered filesystem path, classified by bundle suffix.
///
/// Classification is mutually exclusive: `.framework` wins over `.app`
/// (a name cannot carry both), and everything else is [`PathEntry::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEntry {
    /// Path whose name ends in `.framework`.
    Framework(PathBuf),
    /// Path whose name ends in `.app`.
    App(PathBuf),
    /// Any other path; candidate status depends on binary type detection.
    Other(PathBuf),
}

impl PathEntry {
    /// Classify a path by its name suffix.
    pub fn classify(path: PathBuf) -> Self {
        if has_suffix(&path, FRAMEWORK_SUFFIX) {
            PathEntry::Framework(path)
        } else if has_suffix(&path, BUNDLE_SUFFIX) {
            PathEntry::App(path)
        } else {
            PathEntry::Other(path)
        }
    }

    /// The underlying path, regardless of variant.
    pub fn path(&self) -> &Path {
        match self {
            PathEntry::Framework(p) | PathEntry::App(p) | PathEntry::Other(p) => p,
        }
    }
}

/// Check whether the final component of `path` ends with `suffix`.
pub(crate) fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

/// Validate a bundle root path.
///
/// The path must exist and its name must end with [`BUNDLE_SUFFIX`].
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if the path does not exist, or
/// [`Error::NotABundle`] if the name lacks the `.app` suffix.
pub fn validate_bundle_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }

    if !has_suffix(path, BUNDLE_SUFFIX) {
        return Err(Error::NotABundle(path.to_path_buf()));
    }

    Ok(path.to_path_buf())
}
