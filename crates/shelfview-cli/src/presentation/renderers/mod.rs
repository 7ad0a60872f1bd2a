pub mod console;
pub mod tui;

pub use console::{ConsoleOptions, ConsoleRenderer};
pub use tui::{DashboardSettings, TuiEvent, TuiRenderer};
