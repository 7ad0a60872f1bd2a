//! # Presentation layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] --> plain / json / csv
//!                                                 \-> [ TuiRenderer ] --> views/tui widgets
//! ```
//!
//! * `view_models/`: raw data for one screen. Serializable; `--format json`
//!   dumps it unchanged, so it holds numbers and options, not display strings.
//! * `presenters/`: turn an engine `PageView` into a view model. Decides
//!   things like which empty-state message applies.
//! * `formatters/`: price, truncation, wrapping and placeholder text.
//! * `views/`: `fmt::Display` for console output and ratatui widgets for the
//!   dashboard. Only map view models to text and cells.
//! * `renderers/`: drive output. The TUI renderer owns the terminal, input
//!   and UI-only state (search focus, scroll, popup).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleOptions, ConsoleRenderer, DashboardSettings, TuiEvent, TuiRenderer};
