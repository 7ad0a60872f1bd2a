use std::path::PathBuf;

use thiserror::Error;

/// Result type for shelfview-client operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Why the catalog could not be loaded.
///
/// Any of these aborts the whole fetch: there is no retry and no partial
/// catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode products from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
