//! Gallery manifest generation.
//!
//! Scans a gallery root one level deep. Subdirectories become albums and images
//! directly in the root are listed as ungrouped:
//!
//! ```text
//! assets/gallery/
//! ├── manifest.json        # read for captions, then rewritten
//! ├── sunset.jpg           # ungrouped
//! ├── Trip/                # album "Trip"
//! │   ├── a.png            # cover (first by name)
//! │   ├── b.jpg
//! │   └── raw/             # not scanned: no recursion below albums
//! └── Empty/               # no images → dropped
//! ```
//!
//! ## Ordering
//!
//! Albums, photos within an album, and ungrouped photos are all ordered by
//! case-insensitive name. The album cover is its first photo in that order.
//!
//! ## Captions
//!
//! Everything in the manifest is recomputed from the filesystem except
//! captions, which are looked up in the previous manifest by photo key (see
//! [`crate::captions`]). New or renamed photos start with an empty caption.

use crate::captions::{self, Captions, CaptionsError};
use crate::listing;
use crate::write::write_json_atomic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions recognized as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "avif", "heic", "heif",
];

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Gallery directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Failed to list {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Captions(#[from] CaptionsError),
}

/// The gallery manifest as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryManifest {
    pub albums: Vec<Album>,
    pub ungrouped: Vec<Photo>,
}

impl GalleryManifest {
    /// Number of photos across all albums plus ungrouped ones.
    pub fn photo_count(&self) -> usize {
        self.albums.iter().map(|a| a.photos.len()).sum::<usize>() + self.ungrouped.len()
    }
}

/// A subdirectory of the gallery root with at least one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Display title; currently the folder name
    pub title: String,
    /// Subdirectory name, also the caption key prefix
    pub folder: String,
    /// File name of the first photo
    pub cover: String,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub file: String,
    pub caption: String,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct GalleryRun {
    pub manifest_path: PathBuf,
    pub manifest: GalleryManifest,
    /// Number of captions recovered from the previous manifest
    pub recovered_captions: usize,
}

/// Read captions from `gallery_dir/manifest_name`, rescan, and rewrite the manifest.
pub fn generate(gallery_dir: &Path, manifest_name: &str) -> Result<GalleryRun, GalleryError> {
    if !gallery_dir.exists() {
        return Err(GalleryError::MissingDirectory(gallery_dir.to_path_buf()));
    }
    let manifest_path = gallery_dir.join(manifest_name);
    let existing = captions::load(&manifest_path)?;
    let manifest = build_manifest(gallery_dir, &existing)?;
    write_json_atomic(&manifest_path, &manifest).map_err(|source| GalleryError::Write {
        path: manifest_path.clone(),
        source,
    })?;
    Ok(GalleryRun {
        manifest_path,
        manifest,
        recovered_captions: existing.len(),
    })
}

/// Scan `gallery_dir` and assemble the manifest, pulling captions from `existing`.
pub fn build_manifest(
    gallery_dir: &Path,
    existing: &Captions,
) -> Result<GalleryManifest, GalleryError> {
    let (subdirs, root_images) = split_gallery(gallery_dir)?;

    let mut albums = Vec::new();
    for subdir in &subdirs {
        if let Some(album) = build_album(subdir, existing)? {
            albums.push(album);
        }
    }

    let ungrouped = root_images
        .iter()
        .map(|img| photo(None, img, existing))
        .collect();

    Ok(GalleryManifest { albums, ungrouped })
}

/// Partition the immediate children of the gallery root into subdirectories and
/// image files. Other files (including the manifest) are dropped.
pub fn split_gallery(gallery_dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), GalleryError> {
    let entries = list(gallery_dir)?;
    let mut dirs = Vec::new();
    let mut images = Vec::new();
    for entry in entries {
        if entry.is_dir() {
            dirs.push(entry);
        } else if is_image(&entry) {
            images.push(entry);
        }
    }
    Ok((dirs, images))
}

/// Image files directly inside an album directory.
pub fn list_album_images(album_dir: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    Ok(list(album_dir)?
        .into_iter()
        .filter(|p| is_image(p))
        .collect())
}

pub fn is_image(path: &Path) -> bool {
    path.is_file() && listing::has_extension(path, IMAGE_EXTENSIONS)
}

/// Build an album from a subdirectory, or `None` if it holds no images.
fn build_album(album_dir: &Path, existing: &Captions) -> Result<Option<Album>, GalleryError> {
    let images = list_album_images(album_dir)?;
    let Some(first) = images.first() else {
        return Ok(None);
    };

    let folder = listing::file_name_string(album_dir);
    let cover = listing::file_name_string(first);
    let photos = images
        .iter()
        .map(|img| photo(Some(folder.as_str()), img, existing))
        .collect();

    Ok(Some(Album {
        title: folder.clone(),
        folder,
        cover,
        photos,
    }))
}

fn photo(folder: Option<&str>, path: &Path, existing: &Captions) -> Photo {
    let file = listing::file_name_string(path);
    let caption = existing.get(folder, &file);
    Photo { file, caption }
}

fn list(dir: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    listing::collect_entries(dir).map_err(|source| GalleryError::List {
        path: dir.to_path_buf(),
        source,
    })
}
