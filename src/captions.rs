//! Caption recovery from a previously written gallery manifest.
//!
//! Captions are typed by hand into `manifest.json`, so they are the one piece
//! of state that has to survive regeneration. Before rescanning, the existing
//! manifest is read and flattened into a lookup keyed by photo identity:
//!
//! | Photo | Key |
//! |-------|-----|
//! | Ungrouped `sunset.jpg` | `sunset.jpg` |
//! | `a.png` in album `Trip` | `Trip/a.png` |
//!
//! A caption carries over only if its key is unchanged. Renaming a file or its
//! album folder resets the caption to empty.
//!
//! ## Accepted shapes
//!
//! Two top-level shapes are decoded, then immediately normalized into [`Captions`]:
//!
//! ```text
//! [ {"file": "a.jpg", "caption": "..."} ]               # legacy: all ungrouped
//! { "albums": [ {"folder": "Trip", "photos": [...]} ],
//!   "ungrouped": [ {"file": "b.jpg", "caption": "..."} ] } # current
//! ```
//!
//! Entries inside either shape are read leniently: anything without a string
//! `file` is skipped and a missing or non-string `caption` reads as empty.
//! Any other top-level JSON value is an error.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptionsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "{0} must be either an array (old format) or an object with 'albums' and 'ungrouped' (current format)"
    )]
    UnrecognizedShape(PathBuf),
}

/// Top-level manifest shapes, oldest first.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredManifest {
    Legacy(Vec<Value>),
    Current(StoredGallery),
}

#[derive(Deserialize)]
struct StoredGallery {
    #[serde(default)]
    albums: Value,
    #[serde(default)]
    ungrouped: Value,
}

/// Lookup key for a photo's caption.
pub fn caption_key(folder: Option<&str>, file: &str) -> String {
    match folder {
        Some(folder) => format!("{folder}/{file}"),
        None => file.to_string(),
    }
}

/// Flat caption lookup recovered from a previous run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captions {
    by_key: HashMap<String, String>,
}

impl Captions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caption for an album photo (`folder` is `Some`) or an ungrouped one.
    /// Unknown photos get an empty caption.
    pub fn get(&self, folder: Option<&str>, file: &str) -> String {
        self.by_key
            .get(&caption_key(folder, file))
            .cloned()
            .unwrap_or_default()
    }

    pub fn insert(&mut self, folder: Option<&str>, file: &str, caption: String) {
        self.by_key.insert(caption_key(folder, file), caption);
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    fn from_stored(stored: StoredManifest) -> Self {
        let mut captions = Self::new();
        match stored {
            StoredManifest::Legacy(items) => {
                for (file, caption) in stored_photos(&items) {
                    captions.insert(None, file, caption);
                }
            }
            StoredManifest::Current(gallery) => {
                for (file, caption) in stored_photos(as_slice(&gallery.ungrouped)) {
                    captions.insert(None, file, caption);
                }
                for album in as_slice(&gallery.albums) {
                    let Some(folder) = album.get("folder").and_then(Value::as_str) else {
                        continue;
                    };
                    let photos = album.get("photos").map(as_slice).unwrap_or_default();
                    for (file, caption) in stored_photos(photos) {
                        captions.insert(Some(folder), file, caption);
                    }
                }
            }
        }
        captions
    }
}

/// Load captions from the manifest at `path`. A missing file yields no captions.
pub fn load(path: &Path) -> Result<Captions, CaptionsError> {
    if !path.exists() {
        return Ok(Captions::new());
    }
    let content = fs::read_to_string(path).map_err(|source| CaptionsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Decode manifest text. `path` is only used in error messages.
pub fn parse(path: &Path, content: &str) -> Result<Captions, CaptionsError> {
    let value: Value =
        serde_json::from_str(content).map_err(|source| CaptionsError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
    let stored = StoredManifest::deserialize(value)
        .map_err(|_| CaptionsError::UnrecognizedShape(path.to_path_buf()))?;
    Ok(Captions::from_stored(stored))
}

fn as_slice(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

/// `(file, caption)` pairs from a list of stored photo entries.
fn stored_photos(items: &[Value]) -> impl Iterator<Item = (&str, String)> {
    items.iter().filter_map(|item| {
        let file = item.get("file")?.as_str()?;
        let caption = item
            .get("caption")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Some((file, caption.to_string()))
    })
}
