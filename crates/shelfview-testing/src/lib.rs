//! Testing infrastructure for shelfview tests.
//!
//! - `fixtures`: deterministic product catalogs
//! - `files`: catalog JSON files in temporary directories
//! - `server`: a small axum server that speaks the products API

pub mod files;
pub mod fixtures;
pub mod server;

pub use files::CatalogFile;
pub use fixtures::{numbered_products, sample_products};
pub use server::{CatalogServer, Reply};
