pub mod list;
pub mod tui;

pub use list::ProductListView;
