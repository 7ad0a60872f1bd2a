// NOTE: shelfview layering
//
// types   -> Product, sort and page vocabulary
// engine  -> pure filter/sort/paginate pipeline over DashboardState snapshots
// client  -> paged catalog fetching (HTTP or JSON file)
// cli     -> this crate: args, config, logging, handlers, presentation
//
// The pipeline never sees a terminal and the renderer never computes a page
// itself: handlers call the engine, presenters turn a PageView into view
// models, and views only draw view models.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, SortArg};
pub use commands::run;
