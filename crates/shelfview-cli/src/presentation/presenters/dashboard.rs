use shelfview_engine::PageView;
use shelfview_types::{PageSizeChoices, SortState};

use crate::presentation::view_models::{
    DashboardViewModel, PageSizeOptionViewModel, PaginationViewModel, ProductRowViewModel,
    StatsViewModel,
};

/// Turn one projected page into the dashboard view model.
///
/// `search` is the raw box contents; the view keeps what the user typed
/// while the pipeline works on the normalized term.
pub fn present_dashboard(
    view: &PageView<'_>,
    search: &str,
    sort: SortState,
    choices: &PageSizeChoices,
    currency: &str,
) -> DashboardViewModel {
    let rows = view
        .items
        .iter()
        .enumerate()
        .map(|(idx, product)| ProductRowViewModel {
            row_number: view.start + idx + 1,
            id: product.id.get(),
            title: product.title.clone(),
            price: product.price,
            category: product.category_name().map(str::to_string),
            image_url: product.primary_image().map(str::to_string),
            description: product.description.clone(),
        })
        .collect();

    let page_sizes = choices
        .as_slice()
        .iter()
        .map(|&size| PageSizeOptionViewModel {
            size,
            active: size == view.page_size,
        })
        .collect();

    let empty_message = if !view.is_empty() {
        None
    } else if search.trim().is_empty() {
        Some("No products found".to_string())
    } else {
        Some(format!("No products match \"{}\"", search.trim()))
    };

    DashboardViewModel {
        search: search.to_string(),
        sort,
        currency: currency.to_string(),
        rows,
        pagination: PaginationViewModel {
            page: view.page,
            total_pages: view.total_pages,
            page_size: view.page_size,
            markers: view.markers.clone(),
            has_previous: view.has_previous(),
            has_next: view.has_next(),
        },
        page_sizes,
        stats: StatsViewModel {
            total_products: view.total_count,
            filtered: view.filtered_count,
            showing: view.items.len(),
            from: view.first_row(),
            to: view.last_row(),
        },
        empty_message,
    }
}
