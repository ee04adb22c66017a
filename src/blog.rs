//! Blog manifest generation.
//!
//! Scans a posts directory for Markdown files, reads the frontmatter of each,
//! and writes a JSON array of post metadata newest-first:
//!
//! ```text
//! assets/blog/
//! ├── manifest.json        # written here
//! ├── hello-world.md
//! ├── My-Post.md           # slug "my-post"
//! └── drafts/              # subdirectories are ignored
//! ```
//!
//! ## Ordering
//!
//! Posts are discovered in case-insensitive filename order, then stably sorted
//! by `date` descending. Dates are compared as plain strings, which is only
//! chronological for ISO-8601 (`YYYY-MM-DD`) values. Other formats are not
//! rejected; they simply sort by their characters.
//!
//! ## Validation
//!
//! `title` and `date` must be present, non-empty scalars. `summary` must be a
//! scalar and `tags` a list when present. The first invalid post aborts the
//! whole run and nothing is written.

use crate::frontmatter::{self, FrontmatterError, Value};
use crate::listing;
use crate::write::write_json_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const POST_EXTENSIONS: &[&str] = &["md"];

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Blog directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Failed to list {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
    #[error("Missing or invalid '{field}' in {path}")]
    MissingField { field: &'static str, path: PathBuf },
    #[error("Invalid '{field}' in {path}: expected {expected}, found {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: Value,
        path: PathBuf,
    },
}

/// Metadata for one post, in manifest field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostMeta {
    /// Lower-cased, trimmed filename stem
    pub slug: String,
    /// Filename including extension
    pub file: String,
    pub title: String,
    /// Expected ISO-8601 so that string order is date order
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct BlogRun {
    pub manifest_path: PathBuf,
    pub posts: Vec<BlogPostMeta>,
}

/// Scan `posts_dir`, build the manifest, and write it to `posts_dir/manifest_name`.
pub fn generate(posts_dir: &Path, manifest_name: &str) -> Result<BlogRun, BlogError> {
    let posts = build_manifest(posts_dir)?;
    let manifest_path = posts_dir.join(manifest_name);
    write_json_atomic(&manifest_path, &posts).map_err(|source| BlogError::Write {
        path: manifest_path.clone(),
        source,
    })?;
    Ok(BlogRun {
        manifest_path,
        posts,
    })
}

/// Read every post in `posts_dir` and return their metadata newest-first.
pub fn build_manifest(posts_dir: &Path) -> Result<Vec<BlogPostMeta>, BlogError> {
    let mut posts = discover_posts(posts_dir)?
        .iter()
        .map(|path| extract_meta(path))
        .collect::<Result<Vec<_>, _>>()?;
    sort_newest_first(&mut posts);
    Ok(posts)
}

/// Markdown files directly inside `posts_dir`, in case-insensitive name order.
pub fn discover_posts(posts_dir: &Path) -> Result<Vec<PathBuf>, BlogError> {
    if !posts_dir.exists() {
        return Err(BlogError::MissingDirectory(posts_dir.to_path_buf()));
    }
    let entries = listing::collect_entries(posts_dir).map_err(|source| BlogError::List {
        path: posts_dir.to_path_buf(),
        source,
    })?;
    Ok(entries
        .into_iter()
        .filter(|p| p.is_file() && listing::has_extension(p, POST_EXTENSIONS))
        .collect())
}

/// Stable sort by `date`, descending. Equal dates keep discovery order.
pub fn sort_newest_first(posts: &mut [BlogPostMeta]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Read a post file and extract its metadata.
pub fn extract_meta(path: &Path) -> Result<BlogPostMeta, BlogError> {
    let text = fs::read_to_string(path).map_err(|source| BlogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.replace("\r\n", "\n");
    let fm = frontmatter::parse(&text).map_err(|source| BlogError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;
    meta_from_frontmatter(path, &fm)
}

/// Validate parsed frontmatter and turn it into post metadata.
///
/// `path` supplies the slug and file name and is named in every error.
pub fn meta_from_frontmatter(
    path: &Path,
    fm: &frontmatter::Frontmatter,
) -> Result<BlogPostMeta, BlogError> {
    let title = required_scalar(fm, "title", path)?;
    let date = required_scalar(fm, "date", path)?;

    let summary = match fm.get("summary") {
        None => String::new(),
        Some(Value::Scalar(s)) => s.clone(),
        Some(other) => {
            return Err(BlogError::InvalidField {
                field: "summary",
                expected: "a string",
                found: other.clone(),
                path: path.to_path_buf(),
            });
        }
    };

    let tags = match fm.get("tags") {
        None => Vec::new(),
        Some(Value::List(items)) => items.clone(),
        Some(other) => {
            return Err(BlogError::InvalidField {
                field: "tags",
                expected: "a [bracketed, list]",
                found: other.clone(),
                path: path.to_path_buf(),
            });
        }
    };

    Ok(BlogPostMeta {
        slug: slug_for(path),
        file: listing::file_name_string(path),
        title,
        date,
        summary,
        tags,
    })
}

fn required_scalar(
    fm: &frontmatter::Frontmatter,
    field: &'static str,
    path: &Path,
) -> Result<String, BlogError> {
    fm.get(field)
        .and_then(Value::as_scalar)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| BlogError::MissingField {
            field,
            path: path.to_path_buf(),
        })
}

/// Slug from the filename stem: `My-Post.md` → `my-post`.
///
/// No uniqueness check; two posts may share a slug.
pub fn slug_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase().trim().to_string())
        .unwrap_or_default()
}
