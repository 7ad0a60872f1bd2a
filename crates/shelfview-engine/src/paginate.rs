use shelfview_types::{PageMarker, PageSize};

/// Strips with at most this many pages list every page number
const FULL_STRIP_LIMIT: usize = 7;

/// The slice of a list shown for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow<'s, T> {
    pub items: &'s [T],
    /// Page actually shown, after clamping
    pub page: usize,
    pub total_pages: usize,
    /// Index of the first item of the window in the full list
    pub start: usize,
}

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice out page `page` (1-based) of `items`.
///
/// A page outside `[1, total_pages]` is clamped to the nearest valid one, so
/// the window is never longer than `page_size` and never out of bounds.
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> PageWindow<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * page_size.get()).min(items.len());
    let end = (start + page_size.get()).min(items.len());

    PageWindow {
        items: &items[start..end],
        page,
        total_pages,
        start,
    }
}

/// Page-number strip for the navigation controls.
///
/// Up to seven pages are all listed. Beyond that the strip keeps the first
/// and last page, the current page with its direct neighbours, and an
/// ellipsis for each collapsed gap: never more than seven controls.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= FULL_STRIP_LIMIT {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut markers = vec![PageMarker::Page(1)];

    if current > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let first = current.saturating_sub(1).max(2);
    let last = (current + 1).min(total - 1);
    markers.extend((first..=last).map(PageMarker::Page));

    if current + 2 < total {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total));
    markers
}
