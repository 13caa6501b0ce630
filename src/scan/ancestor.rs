//! Common ancestor of the resolved files.

use crate::error::{PackError, PackResult};
use std::path::{Component, Path, PathBuf};

/// Deepest directory containing every file in `files`.
///
/// Works on path components, so `/a/bc` and `/a/b` share `/a`, not `/a/b`.
/// Paths without any shared leading component (different roots or drives)
/// have no common ancestor.
pub fn common_ancestor(files: &[PathBuf]) -> PackResult<PathBuf> {
    let mut dirs = files.iter().map(|file| file.parent().unwrap_or(Path::new("")));
    let Some(first) = dirs.next() else {
        return Err(PackError::NoFilesResolved);
    };

    let mut prefix: Vec<Component<'_>> = first.components().collect();
    for dir in dirs {
        let shared = prefix.iter().zip(dir.components()).take_while(|(a, b)| *a == b).count();
        prefix.truncate(shared);
    }

    if prefix.is_empty() {
        return Err(PackError::NoCommonAncestor);
    }

    Ok(prefix.iter().map(|c| c.as_os_str()).collect())
}
