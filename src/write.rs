//! Atomic JSON manifest writing.
//!
//! Manifests are consumed by the live site, so a reader must never see a
//! half-written file. Data is serialized in full, written to a sibling
//! `<name>.tmp` file, and then renamed over the destination. A rename within
//! one directory is atomic, so the destination is either the old manifest or
//! the new one.
//!
//! The two halves are exposed separately ([`stage_json`] and [`commit`]) so a
//! crash between them can be reproduced in tests. A crash leaves the `.tmp`
//! file behind and the destination untouched; the next successful run
//! overwrites the leftover.

use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while writing `path`: the file name with `.tmp` appended.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Pretty-print `data` as JSON (2-space indent) with a trailing newline.
///
/// Object keys follow struct field order, so output is stable across runs.
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

/// Serialize `data` and write it to the temporary sibling of `path`.
///
/// Returns the staged path. The destination is not touched.
pub fn stage_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> io::Result<PathBuf> {
    let json = to_pretty_json(data)?;
    let staged = temp_path(path);
    fs::write(&staged, json)?;
    Ok(staged)
}

/// Move a staged file over the destination in one rename.
pub fn commit(staged: &Path, path: &Path) -> io::Result<()> {
    fs::rename(staged, path)
}

/// Write `data` to `path` as pretty JSON without ever exposing a partial file.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, data: &T) -> io::Result<()> {
    let staged = stage_json(path, data)?;
    commit(&staged, path)
}
