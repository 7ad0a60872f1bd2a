//! Catalog JSON files in temporary directories.

use anyhow::Result;
use shelfview_types::Product;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A products JSON array written to a temp dir, removed on drop
pub struct CatalogFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl CatalogFile {
    pub fn write(products: &[Product]) -> Result<Self> {
        let json = serde_json::to_string_pretty(products)?;
        Self::write_raw(&json)
    }

    /// Write arbitrary contents, e.g. to test decode failures
    pub fn write_raw(contents: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("products.json");
        fs::write(&path, contents)?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
