//! Depth ordering for resigning.
//!
//! Nested binaries must be resigned before the bundles containing them, so
//! paths are ordered deepest first: descending separator count, ties broken
//! by descending lexicographic order on the path string.

use std::cmp::Reverse;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Sort paths deepest first.
///
/// The ordering guarantees that for any path and one of its ancestors, the
/// descendant sorts strictly earlier.
pub fn sort_deepest_first(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort_by_cached_key(|path| {
        let repr = path.to_string_lossy().into_owned();
        Reverse((depth(&repr), repr))
    });
    paths
}

/// Depth of a path, measured as the number of separators in its string form.
fn depth(path: &str) -> usize {
    path.matches(MAIN_SEPARATOR).count()
}
