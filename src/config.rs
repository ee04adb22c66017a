//! Tool configuration.
//!
//! Both generators read an optional `manifests.toml` at the site root. Every
//! key is optional; the file only needs the values that differ from the
//! defaults:
//!
//! ```toml
//! [blog]
//! dir = "assets/blog"          # Posts directory, relative to the site root
//! manifest = "manifest.json"   # Manifest file name inside `dir`
//!
//! [gallery]
//! dir = "assets/gallery"       # Gallery root, relative to the site root
//! manifest = "manifest.json"   # Manifest file name inside `dir`
//! ```
//!
//! User values are merged over the stock defaults as TOML tables, then the
//! result is deserialized and validated. Unknown keys are rejected to catch
//! typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILENAME: &str = "manifests.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration for both generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub blog: TargetConfig,
    pub gallery: TargetConfig,
}

/// Where one generator reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Input directory, relative to the site root
    pub dir: String,
    /// Manifest file name, written inside `dir`
    pub manifest: String,
}

impl TargetConfig {
    fn with_dir(dir: &str) -> Self {
        Self {
            dir: dir.to_string(),
            manifest: "manifest.json".to_string(),
        }
    }

    /// Input directory resolved against `site_root`.
    pub fn dir_in(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.dir)
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{section}.dir must not be empty"
            )));
        }
        let name = self.manifest.as_str();
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
        {
            return Err(ConfigError::Validation(format!(
                "{section}.manifest must be a plain file name, got {name:?}"
            )));
        }
        Ok(())
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            blog: TargetConfig::with_dir("assets/blog"),
            gallery: TargetConfig::with_dir("assets/gallery"),
        }
    }
}

impl ToolConfig {
    /// Validate both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.blog.validate("blog")?;
        self.gallery.validate("gallery")
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ToolConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `manifests.toml` from `site_root` as a raw TOML value.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_raw_config(site_root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = site_root.join(CONFIG_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let table: toml::Table =
        toml::from_str(&content).map_err(|source| ConfigError::Toml { path, source })?;
    Ok(Some(toml::Value::Table(table)))
}

/// Merge an optional overlay onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ToolConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ToolConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::Validation(e.message().to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load the config for `site_root`, falling back to stock defaults.
pub fn load_config(site_root: &Path) -> Result<ToolConfig, ConfigError> {
    let overlay = load_raw_config(site_root)?;
    resolve_config(stock_defaults_value(), overlay)
}
