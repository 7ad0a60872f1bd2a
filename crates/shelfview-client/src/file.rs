use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shelfview_types::Product;
use tracing::debug;

use crate::{CatalogSource, FetchError, MemorySource, Result};

/// A catalog stored as a JSON array of products on disk.
///
/// The file is read once on open and then served in pages like the API.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    products: MemorySource,
}

impl JsonFileSource {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?;

        let products: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode {
                origin: path.display().to_string(),
                source,
            })?;

        debug!(path = %path.display(), count = products.len(), "loaded catalog file");

        Ok(Self {
            path,
            products: MemorySource::new(products),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Product>> {
        Ok(self.products.page(limit, offset))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
