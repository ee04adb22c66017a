//! Shared test utilities for the site-manifests test suite.
//!
//! Fixture builders write posts and placeholder images into a temp directory
//! (the scanners only look at names and extensions, never image bytes).
//! Lookup helpers panic with the available names on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! touch_images(&tmp.path().join("Trip"), &["b.jpg", "a.png"]);
//!
//! let manifest = build_manifest(tmp.path(), &Captions::new()).unwrap();
//! let trip = find_album(&manifest, "Trip");
//! assert_eq!(photo_files(&trip.photos), vec!["a.png", "b.jpg"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::blog::BlogPostMeta;
use crate::gallery::{Album, GalleryManifest, Photo};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write a minimal valid post with only `title` and `date`.
pub fn write_post(dir: &Path, name: &str, title: &str, date: &str) -> PathBuf {
    write_file(
        dir,
        name,
        &format!("---\ntitle: {title}\ndate: {date}\n---\n\nBody of {title}.\n"),
    )
}

/// Render post metadata back into a frontmatter block with every value quoted.
pub fn render_frontmatter(meta: &BlogPostMeta) -> String {
    let tags: Vec<String> = meta.tags.iter().map(|t| format!("\"{t}\"")).collect();
    format!(
        "---\ntitle: \"{}\"\ndate: \"{}\"\nsummary: \"{}\"\ntags: [{}]\n---\n",
        meta.title,
        meta.date,
        meta.summary,
        tags.join(", ")
    )
}

/// Create `dir` (and parents) and drop an empty file for each name.
pub fn touch_images(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Edit the caption of an album photo in an existing gallery manifest, the
/// way a person would by hand.
pub fn set_album_caption(gallery_dir: &Path, folder: &str, file: &str, caption: &str) {
    let path = gallery_dir.join("manifest.json");
    let mut manifest: GalleryManifest =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let photo = manifest
        .albums
        .iter_mut()
        .find(|a| a.folder == folder)
        .and_then(|a| a.photos.iter_mut().find(|p| p.file == file))
        .unwrap_or_else(|| panic!("photo '{folder}/{file}' not in manifest"));
    photo.caption = caption.to_string();
    fs::write(&path, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find an album by folder name. Panics if not found.
pub fn find_album<'a>(manifest: &'a GalleryManifest, folder: &str) -> &'a Album {
    manifest
        .albums
        .iter()
        .find(|a| a.folder == folder)
        .unwrap_or_else(|| {
            let folders = album_folders(manifest);
            panic!("album '{folder}' not found. Available: {folders:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All album folders in manifest order.
pub fn album_folders(manifest: &GalleryManifest) -> Vec<&str> {
    manifest.albums.iter().map(|a| a.folder.as_str()).collect()
}

/// Photo file names in order.
pub fn photo_files(photos: &[Photo]) -> Vec<&str> {
    photos.iter().map(|p| p.file.as_str()).collect()
}

/// Post dates in manifest order.
pub fn post_dates(posts: &[BlogPostMeta]) -> Vec<&str> {
    posts.iter().map(|p| p.date.as_str()).collect()
}

/// Post slugs in manifest order.
pub fn post_slugs(posts: &[BlogPostMeta]) -> Vec<&str> {
    posts.iter().map(|p| p.slug.as_str()).collect()
}
