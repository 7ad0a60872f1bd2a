pub mod error;
pub mod page;
pub mod product;
pub mod sort;

pub use error::{Error, Result};
pub use page::{PageMarker, PageSize, PageSizeChoices, PageState};
pub use product::{Category, Product, ProductId};
pub use sort::{SortDirection, SortField, SortState};
