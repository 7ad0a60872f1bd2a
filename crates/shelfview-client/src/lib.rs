//! Catalog fetching for shelfview.
//!
//! The upstream API serves products in `limit`/`offset` pages with no total
//! count, so the whole collection is pulled by walking pages one at a time
//! until a short page comes back. Where the pages come from is abstracted by
//! [`CatalogSource`]:
//!
//! - [`HttpCatalogSource`]: the REST endpoint, via reqwest
//! - [`JsonFileSource`]: a JSON array on disk, paged the same way
//! - [`MemorySource`]: products already in memory

mod error;
mod fetch;
mod file;
mod http;
mod source;

pub use error::{FetchError, Result};
pub use fetch::{PAGE_LIMIT, fetch_all, fetch_all_with_limit};
pub use file::JsonFileSource;
pub use http::{DEFAULT_BASE_URL, HttpCatalogSource, HttpSourceConfig};
pub use source::{CatalogSource, MemorySource};
