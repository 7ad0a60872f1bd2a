//! Stateless ratatui widgets for the dashboard.
//!
//! Each view borrows a view model (and the layout it was measured with) and
//! only maps it to cells. Formatting goes through `formatters`; geometry
//! comes from `layout` so drawing and hit-testing agree.

pub mod description_popup;
pub mod layout;
pub mod message;
pub mod pagination_bar;
pub mod product_table;
pub mod search_bar;
pub mod status_bar;

pub use description_popup::DescriptionPopupView;
pub use layout::{Column, Control, ControlKind, DashboardLayout, Hit};
pub use message::MessageView;
pub use pagination_bar::PaginationBarView;
pub use product_table::ProductTableView;
pub use search_bar::SearchBarView;
pub use status_bar::StatusBarView;
