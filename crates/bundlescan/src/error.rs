//! Error types for bundle scanning.
//!
//! This module defines the [`enum@Error`] enum covering all failure cases
//! when validating and scanning an app bundle.
//!
//! # See Also
//!
//! - [`crate::Result`] - Convenience type alias using this error

use std::path::PathBuf;
use thiserror::Error;

use crate::macho::DetectionError;

/// Error type for bundle scanning operations.
///
/// All public functions in this crate return [`crate::Result<T>`], which uses
/// this error type. Match on variants to handle specific failure cases.
///
/// # Examples
///
/// ```no_run
/// use bundlescan::{BundleScanner, Error};
///
/// let result = BundleScanner::new().scan("MyApp.app");
/// match result {
///     Ok(report) => println!("{} candidates", report.candidates().len()),
///     Err(Error::NotABundle(path)) => eprintln!("not a bundle: {}", path.display()),
///     Err(e) => eprintln!("scan failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Occurs when reading filesystem metadata or writing scan output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bundle path does not exist.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// The path exists but its name lacks the `.app` suffix.
    #[error("not an app bundle: {0}")]
    NotABundle(PathBuf),

    /// Binary type detection failed.
    ///
    /// The scanner absorbs these per file; this variant surfaces only when a
    /// detector is invoked directly.
    #[error("detection error: {0}")]
    Detection(#[from] DetectionError),
}
