use shelfview_types::Product;

/// Trim and lower-case a raw search box value
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Products whose title contains `term`, ignoring case.
///
/// `term` is normalized here as well, so callers may pass raw input. An empty
/// term keeps every product. Input order is preserved.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = normalize_term(term);
    if term.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| product.title_key().contains(&term))
        .collect()
}
