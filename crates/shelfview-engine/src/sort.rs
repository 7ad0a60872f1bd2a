use std::cmp::Ordering;

use shelfview_types::{Product, SortDirection, SortField, SortState};

/// Order `items` according to `sort`.
///
/// Stable in both directions: products comparing equal keep their input
/// order. `SortState::Unsorted` returns the input untouched.
pub fn sort_products<'a>(mut items: Vec<&'a Product>, sort: SortState) -> Vec<&'a Product> {
    let SortState::Sorted { field, direction } = sort else {
        return items;
    };

    match field {
        SortField::Title => {
            // lower-cased keys are computed once per product, not per comparison
            let mut keyed: Vec<(String, &'a Product)> =
                items.into_iter().map(|p| (p.title_key(), p)).collect();
            keyed.sort_by(|a, b| directed(a.0.cmp(&b.0), direction));
            keyed.into_iter().map(|(_, p)| p).collect()
        }
        SortField::Price => {
            items.sort_by(|a, b| directed(a.price.total_cmp(&b.price), direction));
            items
        }
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
