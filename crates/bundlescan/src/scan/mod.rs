//! Bundle scanning workflow.
//!
//! This is the high-level entry point tying the pieces together:
//! validate the bundle path, walk the tree, order the discovered paths
//! deepest first, classify each one, and produce a [`ScanReport`] listing
//! everything a sequential resigning pass must touch, in the order it must
//! touch it.

pub mod order;

pub use order::sort_deepest_first;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bundle::{collect_paths, validate_bundle_path, PathEntry};
use crate::macho::{BinaryTypeDetector, MachOMagic};
use crate::Result;

/// Scans an app bundle for resigning candidates.
///
/// The detector decides which plain files count as Mach-O binaries; see
/// [`crate::macho`] for the available implementations.
///
/// # Example
///
/// ```no_run
/// use bundlescan::BundleScanner;
///
/// let report = BundleScanner::new().scan("MyApp.app")?;
/// for path in report.ordered_paths() {
///     println!("{}", path.display());
/// }
/// # Ok::<(), bundlescan::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BundleScanner<D = MachOMagic> {
    detector: D,
}

impl BundleScanner<MachOMagic> {
    /// Create a scanner using native magic-number detection.
    pub fn new() -> Self {
        Self {
            detector: MachOMagic,
        }
    }
}

impl Default for BundleScanner<MachOMagic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: BinaryTypeDetector> BundleScanner<D> {
    /// Create a scanner with a custom binary type detector.
    pub fn with_detector(detector: D) -> Self {
        Self { detector }
    }

    /// Scan an app bundle.
    ///
    /// The workflow is a linear pipeline:
    /// 1. Validate that `bundle_path` exists and ends in `.app`
    /// 2. Walk the tree, collecting bundle directories and files
    /// 3. Sort deepest first
    /// 4. Classify each path: frameworks and detected Mach-O files become
    ///    candidates, nested `.app` directories are listed separately
    ///
    /// A detection failure excludes the affected path without aborting the
    /// scan.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle path fails validation. Traversal
    /// errors inside the bundle are skipped, not surfaced.
    pub fn scan(&self, bundle_path: impl AsRef<Path>) -> Result<ScanReport> {
        let root = validate_bundle_path(bundle_path)?;

        let discovered = collect_paths(&root);
        debug!(root = %root.display(), paths = discovered.len(), "bundle walk complete");

        let mut candidates = Vec::new();
        let mut nested_apps = Vec::new();

        for path in sort_deepest_first(discovered) {
            match PathEntry::classify(path) {
                // Framework paths are candidates by suffix alone.
                PathEntry::Framework(path) => candidates.push(path),
                PathEntry::App(path) => nested_apps.push(path),
                PathEntry::Other(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    match self.detector.is_macho(&path) {
                        Ok(true) => candidates.push(path),
                        Ok(false) => {}
                        Err(err) => {
                            debug!(
                                path = %path.display(),
                                error = %err,
                                "binary type detection failed, excluding path"
                            );
                        }
                    }
                }
            }
        }

        debug!(
            candidates = candidates.len(),
            nested_apps = nested_apps.len(),
            "scan complete"
        );

        Ok(ScanReport {
            candidates,
            nested_apps,
            root,
        })
    }
}

/// Result of a bundle scan.
///
/// Holds the resigning candidates deepest first, nested app bundles in the
/// same ordering, and the validated root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    candidates: Vec<PathBuf>,
    nested_apps: Vec<PathBuf>,
    root: PathBuf,
}

impl ScanReport {
    /// Framework directories and Mach-O files, deepest first.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Nested `.app` bundles discovered inside the root bundle.
    pub fn nested_apps(&self) -> &[PathBuf] {
        &self.nested_apps
    }

    /// The validated root bundle path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All paths in resigning order: candidates, nested apps, then the root.
    pub fn ordered_paths(&self) -> impl Iterator<Item = &Path> {
        self.candidates
            .iter()
            .chain(self.nested_apps.iter())
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.root.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macho::FileCommand;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const MACHO_64: [u8; 8] = [0xcf, 0xfa, 0xed, 0xfe, 0, 0, 0, 0];

    fn make_bundle(dir: &Path) -> PathBuf {
        let bundle = dir.join("X.app");
        fs::create_dir(&bundle).unwrap();

        let macos = bundle.join("MacOS");
        fs::create_dir(&macos).unwrap();
        fs::write(macos.join("X"), MACHO_64).unwrap();

        let frameworks = bundle.join("Frameworks");
        fs::create_dir(&frameworks).unwrap();
        fs::create_dir(frameworks.join("Y.framework")).unwrap();

        let resources = bundle.join("Resources");
        fs::create_dir(&resources).unwrap();
        fs::write(resources.join("icon.png"), b"\x89PNG").unwrap();

        bundle
    }

    #[test]
    fn test_scan_basic_bundle() {
        let temp_dir = tempdir().unwrap();
        let bundle = make_bundle(temp_dir.path());

        let report = BundleScanner::new().scan(&bundle).unwrap();

        let lines: Vec<_> = report.ordered_paths().collect();
        assert_eq!(
            lines,
            vec![
                bundle.join("MacOS/X").as_path(),
                bundle.join("Frameworks/Y.framework").as_path(),
                bundle.as_path(),
            ]
        );
    }

    #[test]
    fn test_scan_rejects_non_bundle() {
        let temp_dir = tempdir().unwrap();
        let result = BundleScanner::new().scan(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_nested_app_listed_between_candidates_and_root() {
        let temp_dir = tempdir().unwrap();
        let bundle = temp_dir.path().join("Outer.app");
        let inner = bundle.join("PlugIns").join("Inner.app");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join("Inner"), MACHO_64).unwrap();

        let report = BundleScanner::new().scan(&bundle).unwrap();

        assert_eq!(report.candidates(), &[inner.join("Inner")]);
        assert_eq!(report.nested_apps(), &[inner.clone()]);
        assert_eq!(report.root(), bundle.as_path());

        let ordered: Vec<_> = report.ordered_paths().collect();
        assert_eq!(
            ordered,
            vec![inner.join("Inner").as_path(), inner.as_path(), bundle.as_path()]
        );
    }

    #[test]
    fn test_detection_failure_excludes_path_without_aborting() {
        let temp_dir = tempdir().unwrap();
        let bundle = make_bundle(temp_dir.path());

        // Missing tool: every plain-file detection fails and is swallowed.
        let scanner = BundleScanner::with_detector(FileCommand::new("bundlescan-no-such-tool"));
        let report = scanner.scan(&bundle).unwrap();

        assert_eq!(report.candidates(), &[bundle.join("Frameworks/Y.framework")]);
        assert_eq!(report.root(), bundle.as_path());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let bundle = make_bundle(temp_dir.path());

        let scanner = BundleScanner::new();
        let first = scanner.scan(&bundle).unwrap();
        let second = scanner.scan(&bundle).unwrap();
        assert_eq!(first, second);
    }
}
