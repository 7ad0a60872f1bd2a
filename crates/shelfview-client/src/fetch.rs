use shelfview_types::Product;
use tracing::{debug, info, warn};

use crate::{CatalogSource, Result};

/// Page size requested from the upstream API
pub const PAGE_LIMIT: usize = 100;

/// Pull the whole catalog from `source` in pages of [`PAGE_LIMIT`]
pub async fn fetch_all<S>(source: &S) -> Result<Vec<Product>>
where
    S: CatalogSource + ?Sized,
{
    fetch_all_with_limit(source, PAGE_LIMIT).await
}

/// Pull the whole catalog from `source`, `limit` products per request.
///
/// Pages are requested one after another (the page count is unknown up
/// front) and concatenated until a page comes back empty or short. The first
/// failure aborts the fetch; nothing fetched so far is returned.
pub async fn fetch_all_with_limit<S>(source: &S, limit: usize) -> Result<Vec<Product>>
where
    S: CatalogSource + ?Sized,
{
    let limit = limit.max(1);
    let origin = source.describe();
    let mut products = Vec::new();
    let mut page_index = 0;

    loop {
        let offset = page_index * limit;
        let page = match source.fetch_page(limit, offset).await {
            Ok(page) => page,
            Err(err) => {
                warn!(%origin, offset, error = %err, "catalog page request failed");
                return Err(err);
            }
        };

        let received = page.len();
        debug!(%origin, offset, received, "fetched catalog page");
        products.extend(page);

        if received < limit {
            break;
        }
        page_index += 1;
    }

    info!(%origin, total = products.len(), requests = page_index + 1, "catalog loaded");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FetchError, MemorySource};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn products(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(i, format!("Product {i}"), i as f64))
            .collect()
    }

    /// Records every requested offset and fails at a given one
    struct ScriptedSource {
        inner: MemorySource,
        fail_at: Option<usize>,
        offsets: Mutex<Vec<usize>>,
    }

    impl ScriptedSource {
        fn new(n: u64, fail_at: Option<usize>) -> Self {
            Self {
                inner: MemorySource::new(products(n)),
                fail_at,
                offsets: Mutex::new(Vec::new()),
            }
        }

        fn offsets(&self) -> Vec<usize> {
            self.offsets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Product>> {
            self.offsets.lock().unwrap().push(offset);
            if self.fail_at == Some(offset) {
                return Err(FetchError::Status {
                    url: format!("scripted?offset={offset}"),
                    status: 502,
                });
            }
            self.inner.fetch_page(limit, offset).await
        }

        fn describe(&self) -> String {
            "scripted".to_string()
        }
    }

    #[tokio::test]
    async fn test_short_page_stops_the_walk() {
        let source = ScriptedSource::new(12, None);
        let all = fetch_all_with_limit(&source, 5).await.unwrap();

        assert_eq!(all.len(), 12);
        assert_eq!(source.offsets(), vec![0, 5, 10]);
        assert_eq!(all.first().map(|p| p.id.get()), Some(1));
        assert_eq!(all.last().map(|p| p.id.get()), Some(12));
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_a_trailing_empty_page() {
        let source = ScriptedSource::new(10, None);
        let all = fetch_all_with_limit(&source, 5).await.unwrap();

        assert_eq!(all.len(), 10);
        assert_eq!(source.offsets(), vec![0, 5, 10]);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let source = ScriptedSource::new(0, None);
        let all = fetch_all(&source).await.unwrap();

        assert!(all.is_empty());
        assert_eq!(source.offsets(), vec![0]);
    }

    #[tokio::test]
    async fn test_default_limit_is_one_hundred() {
        let source = ScriptedSource::new(250, None);
        let all = fetch_all(&source).await.unwrap();

        assert_eq!(all.len(), 250);
        assert_eq!(source.offsets(), vec![0, 100, 200]);
    }

    #[tokio::test]
    async fn test_failure_discards_partial_results() {
        let source = ScriptedSource::new(12, Some(5));
        let err = fetch_all_with_limit(&source, 5).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 502, .. }));
        assert_eq!(source.offsets(), vec![0, 5]);
    }
}
