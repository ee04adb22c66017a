//! Immediate-children directory listing shared by both generators.
//!
//! Entries come back in case-insensitive name order, with the exact name as
//! the tie-break so `a.jpg` and `A.jpg` still land in a fixed order. Nothing
//! here recurses: both tools only look one level down.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the immediate children of `dir`, sorted by [`name_order`].
pub fn collect_entries(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| name_order(a.file_name(), b.file_name()))
        .into_iter()
        .map(|entry| entry.map(walkdir::DirEntry::into_path))
        .collect()
}

/// Case-insensitive name comparison with an exact-name tie-break.
pub fn name_order(a: &OsStr, b: &OsStr) -> Ordering {
    let lower_a = a.to_string_lossy().to_lowercase();
    let lower_b = b.to_string_lossy().to_lowercase();
    lower_a.cmp(&lower_b).then_with(|| a.cmp(b))
}

/// True if the path's final extension matches one of `extensions`, ignoring
/// ASCII case. Dotfiles like `.jpg` have no extension.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| {
            extensions
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// File name as an owned string (lossy for non-UTF-8 names).
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
