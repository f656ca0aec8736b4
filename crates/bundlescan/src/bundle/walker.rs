//! Recursive bundle traversal.
//!
//! Collects every path relevant to resigning: bundle-suffixed directories
//! and all regular files. Plain directories are descended into but not
//! recorded. Traversal does not prune on a bundle suffix, so a nested
//! `.framework` or `.app` directory is recorded and its contents are still
//! visited and recorded individually.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use super::{has_suffix, BUNDLE_SUFFIX, FRAMEWORK_SUFFIX};

/// Walk the bundle tree and collect paths of interest.
///
/// Visits every entry below `root` exactly once (the root itself is not
/// recorded). Unreadable subtrees are silently skipped; symlinks are not
/// followed and are recorded like files.
pub fn collect_paths(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let root = root.as_ref();
    let mut paths = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if entry.file_type().is_dir() {
            if has_suffix(path, FRAMEWORK_SUFFIX) || has_suffix(path, BUNDLE_SUFFIX) {
                trace!(path = %path.display(), "recorded nested bundle directory");
                paths.push(path.to_path_buf());
            }
            continue;
        }

        paths.push(path.to_path_buf());
    }

    paths
}
