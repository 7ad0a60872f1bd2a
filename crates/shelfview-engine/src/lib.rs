// Engine module - the pure catalog pipeline
// filter -> sort -> paginate, driven by an immutable DashboardState snapshot.
// Nothing in here knows about terminals or HTTP.

pub mod filter;
pub mod paginate;
pub mod sort;
mod state;

pub use filter::{filter_products, normalize_term};
pub use paginate::{PageWindow, page_numbers, paginate, total_pages};
pub use sort::sort_products;
pub use state::{Catalog, DashboardAction, DashboardState, PageView};

use shelfview_types::Product;

// Façade API - what the CLI layer calls

/// Run the whole pipeline for one state snapshot
pub fn project<'a>(catalog: &'a [Product], state: &DashboardState) -> PageView<'a> {
    state.project(catalog)
}
