use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

/// Number of products shown per page (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size).map(Self).ok_or(Error::ZeroPageSize)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get() as u64)
    }
}

/// Requested page position. `current_page` is 1-based; the upper bound is
/// only known once the filtered length is, so the paginator clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: PageSize,
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// Change the size and go back to the first page
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn first_page(self) -> Self {
        self.with_page(1)
    }

    /// Clamp into `[1, total_pages]`
    pub fn clamped(self, total_pages: usize) -> Self {
        self.with_page(self.current_page.min(total_pages.max(1)))
    }
}

/// The discrete page sizes offered by the page-size selector.
///
/// Sorted ascending without duplicates and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeChoices(Vec<PageSize>);

impl PageSizeChoices {
    pub fn new(sizes: &[usize]) -> Result<Self> {
        let mut choices = sizes
            .iter()
            .map(|&size| PageSize::new(size))
            .collect::<Result<Vec<_>>>()?;

        if choices.is_empty() {
            return Err(Error::NoPageSizeChoices);
        }

        choices.sort();
        choices.dedup();
        Ok(Self(choices))
    }

    /// Make sure `size` is selectable, keeping the list ordered
    pub fn including(mut self, size: PageSize) -> Self {
        if let Err(pos) = self.0.binary_search(&size) {
            self.0.insert(pos, size);
        }
        self
    }

    pub fn as_slice(&self) -> &[PageSize] {
        &self.0
    }

    pub fn contains(&self, size: PageSize) -> bool {
        self.0.contains(&size)
    }

    /// Next larger choice, staying on the largest
    pub fn next_after(&self, size: PageSize) -> PageSize {
        self.0
            .iter()
            .copied()
            .find(|&choice| choice > size)
            .unwrap_or_else(|| self.largest())
    }

    /// Next smaller choice, staying on the smallest
    pub fn previous_before(&self, size: PageSize) -> PageSize {
        self.0
            .iter()
            .rev()
            .copied()
            .find(|&choice| choice < size)
            .unwrap_or_else(|| self.smallest())
    }

    fn smallest(&self) -> PageSize {
        self.0[0]
    }

    fn largest(&self) -> PageSize {
        self.0[self.0.len() - 1]
    }
}

/// One control in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    /// Collapsed range of pages
    Ellipsis,
}

impl PageMarker {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(page) => Some(*page),
            PageMarker::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(page) => write!(f, "{}", page),
            PageMarker::Ellipsis => write!(f, "…"),
        }
    }
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(page) => serializer.serialize_u64(*page as u64),
            PageMarker::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(Error::ZeroPageSize));
        assert_eq!(PageSize::try_from(7).map(|s| s.get()), Ok(7));
    }

    #[test]
    fn test_page_state_never_goes_below_one() {
        let state = PageState::new(size(5)).with_page(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_clamp_to_last_valid_page() {
        let state = PageState::new(size(5)).with_page(9);
        assert_eq!(state.clamped(3).current_page, 3);
        assert_eq!(state.clamped(0).current_page, 1);
        assert_eq!(state.clamped(12).current_page, 9);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let state = PageState::new(size(5)).with_page(4).with_page_size(size(20));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, size(20));
    }

    #[test]
    fn test_choices_are_sorted_and_deduplicated() {
        let choices = PageSizeChoices::new(&[20, 5, 10, 5]).unwrap();
        assert_eq!(choices.as_slice(), &[size(5), size(10), size(20)]);
    }

    #[test]
    fn test_choices_reject_empty_and_zero() {
        assert_eq!(PageSizeChoices::new(&[]), Err(Error::NoPageSizeChoices));
        assert_eq!(PageSizeChoices::new(&[5, 0]), Err(Error::ZeroPageSize));
    }

    #[test]
    fn test_choices_step_and_saturate() {
        let choices = PageSizeChoices::new(&[5, 10, 20]).unwrap();
        assert_eq!(choices.next_after(size(5)), size(10));
        assert_eq!(choices.next_after(size(20)), size(20));
        assert_eq!(choices.previous_before(size(10)), size(5));
        assert_eq!(choices.previous_before(size(5)), size(5));
        // a size outside the list still steps to its neighbours
        assert_eq!(choices.next_after(size(7)), size(10));
        assert_eq!(choices.previous_before(size(7)), size(5));
    }

    #[test]
    fn test_including_inserts_in_order() {
        let choices = PageSizeChoices::new(&[5, 20]).unwrap().including(size(8));
        assert_eq!(choices.as_slice(), &[size(5), size(8), size(20)]);
        assert!(choices.contains(size(8)));
    }

    #[test]
    fn test_marker_serializes_as_number_or_ellipsis() {
        let markers = vec![PageMarker::Page(1), PageMarker::Ellipsis, PageMarker::Page(10)];
        let json = serde_json::to_string(&markers).unwrap();
        assert_eq!(json, r#"[1,"...",10]"#);
    }
}
