//! Dashboard state snapshots.
//!
//! Every user interaction is a `DashboardAction`. Applying one to a
//! `DashboardState` yields a new snapshot; the old one is never mutated.
//! `DashboardState::project` runs filter -> sort -> paginate for a snapshot.

use std::sync::Arc;

use serde::Serialize;
use shelfview_types::{PageMarker, PageSize, PageState, Product, SortField, SortState};
use tracing::trace;

use crate::filter::{filter_products, normalize_term};
use crate::paginate::{page_numbers, paginate, total_pages};
use crate::sort::sort_products;

/// The full product collection, fetched once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// A user interaction that changes what the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// New raw search box contents
    Search(String),
    ClearSearch,
    /// Header click on a sortable column
    ToggleSort(SortField),
    SetPageSize(PageSize),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    /// Normalized (trimmed, lower-cased) search term
    pub search: String,
    pub sort: SortState,
    pub page: PageState,
}

impl DashboardState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search: String::new(),
            sort: SortState::Unsorted,
            page: PageState::new(page_size),
        }
    }

    /// Produce the snapshot that follows `action`.
    ///
    /// Search, sort and page-size changes go back to page 1. Navigation is
    /// clamped to the pages that exist for `catalog` under this snapshot's
    /// search, so an out-of-range request lands on the last valid page.
    pub fn apply(&self, action: DashboardAction, catalog: &[Product]) -> Self {
        trace!(?action, "applying dashboard action");

        let next = match action {
            DashboardAction::Search(raw) => Self {
                search: normalize_term(&raw),
                page: self.page.first_page(),
                ..self.clone()
            },
            DashboardAction::ClearSearch => Self {
                search: String::new(),
                page: self.page.first_page(),
                ..self.clone()
            },
            DashboardAction::ToggleSort(field) => Self {
                sort: self.sort.toggle(field),
                page: self.page.first_page(),
                ..self.clone()
            },
            DashboardAction::SetPageSize(size) => Self {
                page: self.page.with_page_size(size),
                ..self.clone()
            },
            DashboardAction::GoToPage(page) => self.with_page(page),
            DashboardAction::NextPage => self.with_page(self.page.current_page + 1),
            DashboardAction::PreviousPage => {
                self.with_page(self.page.current_page.saturating_sub(1))
            }
            DashboardAction::FirstPage => self.with_page(1),
            DashboardAction::LastPage => self.with_page(usize::MAX),
        };

        next.clamped(catalog)
    }

    /// Run the pipeline and return the page to display
    pub fn project<'a>(&self, catalog: &'a [Product]) -> PageView<'a> {
        let filtered = filter_products(catalog, &self.search);
        let sorted = sort_products(filtered, self.sort);
        let window = paginate(&sorted, self.page.current_page, self.page.page_size);

        PageView {
            items: window.items.to_vec(),
            page: window.page,
            page_size: self.page.page_size,
            total_pages: window.total_pages,
            start: window.start,
            filtered_count: sorted.len(),
            total_count: catalog.len(),
            markers: page_numbers(window.page, window.total_pages),
        }
    }

    fn with_page(&self, page: usize) -> Self {
        Self {
            page: self.page.with_page(page),
            ..self.clone()
        }
    }

    fn clamped(self, catalog: &[Product]) -> Self {
        let matching = filter_products(catalog, &self.search).len();
        let total = total_pages(matching, self.page.page_size);
        Self {
            page: self.page.clamped(total),
            ..self
        }
    }
}

/// One rendered page of the pipeline output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    pub items: Vec<&'a Product>,
    pub page: usize,
    pub page_size: PageSize,
    pub total_pages: usize,
    /// Index of `items[0]` within the filtered, sorted list
    pub start: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub markers: Vec<PageMarker>,
}

impl PageView<'_> {
    /// Nothing matched the search (distinct from a failed fetch)
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// 1-based row number of the first shown item, 0 when empty
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.start + 1
        }
    }

    /// 1-based row number of the last shown item, 0 when empty
    pub fn last_row(&self) -> usize {
        self.start + self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
