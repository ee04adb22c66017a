//! # Site Manifests
//!
//! Build-time manifest generators for a static site. The site's front end
//! never lists directories itself; it reads two JSON manifests that these
//! tools regenerate from the filesystem:
//!
//! ```text
//! blog-manifest      assets/blog/*.md       →  assets/blog/manifest.json
//! gallery-manifest   assets/gallery/**      →  assets/gallery/manifest.json
//! ```
//!
//! The tools are independent. Each is a one-shot, single-threaded pass from a
//! directory to a JSON file, and any problem aborts the run before the manifest
//! is touched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Restricted `key: value` frontmatter parser for posts |
//! | [`blog`] | Post discovery, metadata validation, newest-first ordering |
//! | [`gallery`] | Album/ungrouped scan of the gallery root |
//! | [`captions`] | Recovers hand-written captions from the previous gallery manifest |
//! | [`write`] | Atomic write-temp-then-rename JSON output |
//! | [`config`] | Optional `manifests.toml` with input directories and manifest names |
//! | [`output`] | CLI summary and `--verbose` inventory formatting |
//!
//! # Design Decisions
//!
//! ## A Line Scanner, Not YAML
//!
//! Post frontmatter supports only scalars and single-level bracketed lists.
//! A full YAML parser would accept more than the site's templates can render
//! and would interpret values (dates, booleans, numbers) that the manifest
//! wants verbatim as strings.
//!
//! ## Captions Are the Only Carried State
//!
//! The gallery manifest is also where captions are edited by hand. Everything
//! else in it is recomputed on every run; captions are matched back by
//! `folder/file` (or bare `file` for ungrouped photos). See [`captions`].
//!
//! ## Never a Half-Written Manifest
//!
//! Output is staged to `manifest.json.tmp` and renamed into place, so a
//! crashed run leaves the previous manifest intact. See [`write`].

pub mod blog;
pub mod captions;
pub mod config;
pub mod frontmatter;
pub mod gallery;
pub mod listing;
pub mod output;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
