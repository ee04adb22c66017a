//! CLI output formatting for both generators.
//!
//! Every run prints one summary line. With `--verbose` the summary is followed
//! by an inventory of what went into the manifest, using the same two-level
//! pattern for every entity: a header line (positional index + title) and
//! indented context lines.
//!
//! # Output Format
//!
//! ## Blog
//!
//! ```text
//! Wrote assets/blog/manifest.json with 2 posts
//! 001 2024-03-05 Spring notes
//!     Source: spring.md
//!     Tags: garden, notes
//! 002 2024-01-01 Hello
//!     Source: hello.md
//! ```
//!
//! ## Gallery
//!
//! ```text
//! Wrote assets/gallery/manifest.json with 1 albums, 3 photos (1 ungrouped)
//! Albums
//! 001 Trip (2 photos)
//!     Source: Trip/
//!     Cover: a.png
//!     001 a.png
//!         Caption: Golden hour
//!     002 b.jpg
//!
//! Ungrouped
//! 001 solo.gif
//! ```
//!
//! Format functions are pure and return `Vec<String>`; the `print_*` wrappers
//! write them to stdout.

use crate::blog::BlogPostMeta;
use crate::gallery::{GalleryManifest, Photo};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional photo count.
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({} photos)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

fn photo_lines(photos: &[Photo], depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, photo) in photos.iter().enumerate() {
        lines.push(format!(
            "{}{}",
            indent(depth),
            entity_header(i + 1, &photo.file, None)
        ));
        if !photo.caption.is_empty() {
            lines.push(format!("{}Caption: {}", indent(depth + 1), photo.caption));
        }
    }
    lines
}

// ============================================================================
// Blog
// ============================================================================

pub fn blog_summary(posts: &[BlogPostMeta], manifest_path: &Path) -> String {
    format!(
        "Wrote {} with {} posts",
        manifest_path.display(),
        posts.len()
    )
}

/// Summary line, plus the post inventory when `verbose`.
pub fn format_blog_output(
    posts: &[BlogPostMeta],
    manifest_path: &Path,
    verbose: bool,
) -> Vec<String> {
    let mut lines = vec![blog_summary(posts, manifest_path)];
    if !verbose {
        return lines;
    }

    for (i, post) in posts.iter().enumerate() {
        let title = format!("{} {}", post.date, post.title);
        lines.push(entity_header(i + 1, &title, None));
        lines.push(format!("{}Source: {}", indent(1), post.file));
        if !post.tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), post.tags.join(", ")));
        }
    }
    lines
}

pub fn print_blog_output(posts: &[BlogPostMeta], manifest_path: &Path, verbose: bool) {
    for line in format_blog_output(posts, manifest_path, verbose) {
        println!("{}", line);
    }
}

// ============================================================================
// Gallery
// ============================================================================

pub fn gallery_summary(manifest: &GalleryManifest, manifest_path: &Path) -> String {
    format!(
        "Wrote {} with {} albums, {} photos ({} ungrouped)",
        manifest_path.display(),
        manifest.albums.len(),
        manifest.photo_count(),
        manifest.ungrouped.len()
    )
}

/// Summary line, plus album and ungrouped sections when `verbose`.
/// Empty sections are left out.
pub fn format_gallery_output(
    manifest: &GalleryManifest,
    manifest_path: &Path,
    verbose: bool,
) -> Vec<String> {
    let mut lines = vec![gallery_summary(manifest, manifest_path)];
    if !verbose {
        return lines;
    }

    if !manifest.albums.is_empty() {
        lines.push("Albums".to_string());
        for (i, album) in manifest.albums.iter().enumerate() {
            lines.push(entity_header(i + 1, &album.title, Some(album.photos.len())));
            lines.push(format!("{}Source: {}/", indent(1), album.folder));
            lines.push(format!("{}Cover: {}", indent(1), album.cover));
            lines.extend(photo_lines(&album.photos, 1));
        }
    }

    if !manifest.ungrouped.is_empty() {
        if !manifest.albums.is_empty() {
            lines.push(String::new());
        }
        lines.push("Ungrouped".to_string());
        lines.extend(photo_lines(&manifest.ungrouped, 0));
    }

    lines
}

pub fn print_gallery_output(manifest: &GalleryManifest, manifest_path: &Path, verbose: bool) {
    for line in format_gallery_output(manifest, manifest_path, verbose) {
        println!("{}", line);
    }
}
