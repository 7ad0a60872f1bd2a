//! Shared setup for the CLI integration tests.
//!
//! Every command gets an explicit `--config` inside a temp dir so a user's
//! own configuration never leaks into a test run.
#![allow(dead_code)]

use assert_cmd::Command;
use shelfview_testing::{CatalogFile, numbered_products};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    catalog: CatalogFile,
}

impl TestFixture {
    /// Fixture whose catalog file holds `count` numbered products
    pub fn with_products(count: u64) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog =
            CatalogFile::write(&numbered_products(count)).expect("Failed to write catalog");
        Self { temp_dir, catalog }
    }

    pub fn with_catalog(catalog: CatalogFile) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, catalog }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    pub fn catalog_path(&self) -> &Path {
        self.catalog.path()
    }

    /// `shelfview` with the fixture's config and no inherited overrides
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("shelfview").expect("Failed to find binary");
        cmd.env_remove("SHELFVIEW_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    /// `shelfview list --from-file <catalog>`
    pub fn list(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--from-file").arg(self.catalog_path()).arg("list");
        cmd
    }
}
