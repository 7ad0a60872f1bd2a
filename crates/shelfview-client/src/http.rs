use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use shelfview_types::Product;
use tracing::trace;

use crate::{CatalogSource, FetchError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1/products";

#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("shelfview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// The products REST endpoint: `GET <base>?limit=<n>&offset=<m>`
pub struct HttpCatalogSource {
    client: Client,
    base_url: Url,
}

impl HttpCatalogSource {
    pub fn new(config: &HttpSourceConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: config.base_url.clone(),
                message: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for one page; existing query parameters on the base are kept
    pub fn page_url(&self, limit: usize, offset: usize) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Product>> {
        let url = self.page_url(limit, offset);
        trace!(%url, "requesting catalog page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            origin: url.to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}
