//! Common utilities for the binary integration tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway site root.
pub struct TestSite {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestSite {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the site root, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create an empty placeholder image.
    #[allow(dead_code)]
    pub fn touch(&self, rel: &str) -> PathBuf {
        self.write_file(rel, "")
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path.join(rel)).expect("Failed to read file")
    }

    pub fn read_json(&self, rel: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(rel)).expect("Manifest is not valid JSON")
    }

    #[allow(dead_code)]
    pub fn exists(&self, rel: &str) -> bool {
        self.path.join(rel).exists()
    }
}
