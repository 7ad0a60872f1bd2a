use serde::Serialize;
use shelfview_types::{PageMarker, PageSize, SortDirection, SortField, SortState};

/// Everything one dashboard screen (or one `list` page) shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    /// Search box contents as typed
    pub search: String,
    pub sort: SortState,
    pub currency: String,
    pub rows: Vec<ProductRowViewModel>,
    pub pagination: PaginationViewModel,
    pub page_sizes: Vec<PageSizeOptionViewModel>,
    pub stats: StatsViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl DashboardViewModel {
    pub fn sort_direction(&self, field: SortField) -> Option<SortDirection> {
        self.sort.direction_for(field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRowViewModel {
    /// 1-based position within the filtered, sorted list
    pub row_number: usize,
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationViewModel {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: PageSize,
    pub markers: Vec<PageMarker>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSizeOptionViewModel {
    pub size: PageSize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsViewModel {
    pub total_products: usize,
    pub filtered: usize,
    pub showing: usize,
    /// 1-based row range on this page, both 0 when nothing is shown
    pub from: usize,
    pub to: usize,
}
