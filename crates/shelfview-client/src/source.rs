use async_trait::async_trait;
use shelfview_types::Product;

use crate::Result;

/// Something that serves the catalog in `limit`/`offset` pages
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch up to `limit` products starting at `offset`.
    ///
    /// A page shorter than `limit` (or empty) means there is nothing after it.
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Product>>;

    /// Human readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Serves pages out of an in-memory product list
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    products: Vec<Product>,
}

impl MemorySource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub(crate) fn page(&self, limit: usize, offset: usize) -> Vec<Product> {
        self.products
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Product>> {
        Ok(self.page(limit, offset))
    }

    fn describe(&self) -> String {
        format!("memory ({} products)", self.products.len())
    }
}
