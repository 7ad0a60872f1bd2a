//! Per-invocation settings shared by the handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use shelfview_client::{CatalogSource, FetchError, HttpCatalogSource, JsonFileSource, fetch_all};
use shelfview_engine::Catalog;
use tracing::info;

use crate::config::{Config, resolve_config_path};

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub config: Config,
    pub config_path: PathBuf,
    api_url: Option<String>,
    from_file: Option<PathBuf>,
}

impl ExecutionContext {
    pub fn new(
        config_path: Option<&str>,
        api_url: Option<String>,
        from_file: Option<PathBuf>,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let config = Config::load_from(&config_path)?;

        Ok(Self {
            config,
            config_path,
            api_url,
            from_file,
        })
    }

    /// Where the catalog comes from: the JSON file if one was given,
    /// the HTTP endpoint otherwise
    pub async fn open_source(&self) -> Result<Box<dyn CatalogSource>, FetchError> {
        match &self.from_file {
            Some(path) => Ok(Box::new(JsonFileSource::open(path).await?)),
            None => {
                let http = self.config.http_source(self.api_url.as_deref());
                Ok(Box::new(HttpCatalogSource::new(&http)?))
            }
        }
    }

    pub async fn load_catalog(&self) -> Result<Catalog, FetchError> {
        let source = self.open_source().await?;
        let products = fetch_all(source.as_ref()).await?;
        Ok(Catalog::new(products))
    }

    /// Short description of where the catalog will come from
    pub fn source_label(&self) -> String {
        match &self.from_file {
            Some(path) => format!("file {}", path.display()),
            None => self
                .api_url
                .clone()
                .unwrap_or_else(|| self.config.api.base_url.clone()),
        }
    }

    /// Run `load_catalog` on a dedicated single-threaded runtime.
    ///
    /// The outer error is a runtime failure, the inner one a fetch failure.
    pub fn block_on_catalog(&self) -> Result<Result<Catalog, FetchError>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(runtime.block_on(self.load_catalog()))
    }

    pub fn load_catalog_blocking(&self) -> Result<Catalog> {
        let catalog = self
            .block_on_catalog()?
            .context("Data unavailable: the product catalog could not be loaded")?;

        info!(products = catalog.len(), "catalog ready");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfview_testing::{CatalogFile, numbered_products};
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir, from_file: Option<PathBuf>) -> ExecutionContext {
        let config_path = temp_dir.path().join("config.toml");
        ExecutionContext::new(config_path.to_str(), None, from_file).unwrap()
    }

    #[test]
    fn test_loads_catalog_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = CatalogFile::write(&numbered_products(7))?;
        let ctx = context(&temp_dir, Some(file.path().to_path_buf()));

        let catalog = ctx.load_catalog_blocking()?;
        assert_eq!(catalog.len(), 7);
        assert!(ctx.source_label().starts_with("file "));
        Ok(())
    }

    #[test]
    fn test_fetch_failure_is_reported_as_unavailable() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = CatalogFile::write_raw("{ not json")?;
        let ctx = context(&temp_dir, Some(file.path().to_path_buf()));

        let err = ctx.load_catalog_blocking().unwrap_err();
        assert!(format!("{:#}", err).starts_with("Data unavailable"));

        let inner = ctx.block_on_catalog()?;
        assert!(matches!(inner, Err(FetchError::Decode { .. })));
        Ok(())
    }

    #[test]
    fn test_api_url_overrides_source_label() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        let ctx = ExecutionContext::new(
            config_path.to_str(),
            Some("http://127.0.0.1:1/products".to_string()),
            None,
        )?;
        assert_eq!(ctx.source_label(), "http://127.0.0.1:1/products");
        Ok(())
    }
}
