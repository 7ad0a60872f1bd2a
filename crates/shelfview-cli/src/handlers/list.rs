use std::io::{self, Write};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use shelfview_engine::{DashboardAction, DashboardState};
use shelfview_types::{PageSize, SortDirection, SortField, SortState};
use tracing::debug;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_dashboard;
use crate::presentation::renderers::console::{ConsoleOptions, ConsoleRenderer};

pub struct ListRequest {
    pub search: Option<String>,
    pub sort: Option<SortField>,
    pub descending: bool,
    pub page: usize,
    pub page_size: Option<usize>,
    pub format: OutputFormat,
}

pub fn handle(ctx: &ExecutionContext, request: ListRequest) -> Result<()> {
    let (default_size, choices) = ctx.config.pagination()?;
    let page_size = match request.page_size {
        Some(size) => PageSize::new(size).context("--page-size")?,
        None => default_size,
    };

    let catalog = ctx.load_catalog_blocking()?;
    let products = catalog.products();

    let search = request.search.unwrap_or_default();
    let mut state = DashboardState::new(page_size);
    state.sort = sort_state(request.sort, request.descending);
    let state = state
        .apply(DashboardAction::Search(search.clone()), products)
        .apply(DashboardAction::GoToPage(request.page), products);

    debug!(?state, "listing page");

    let view = state.project(products);
    let model = present_dashboard(
        &view,
        &search,
        state.sort,
        &choices.including(page_size),
        &ctx.config.display.currency,
    );

    let stdout = io::stdout();
    let options = ConsoleOptions {
        format: request.format,
        colored: stdout.is_terminal(),
        width: terminal_size::terminal_size().map(|(width, _)| width.0 as usize),
    };

    let mut out = stdout.lock();
    ConsoleRenderer::new(options).render(&model, &mut out)?;
    out.flush()?;
    Ok(())
}

fn sort_state(field: Option<SortField>, descending: bool) -> SortState {
    match field {
        None => SortState::Unsorted,
        Some(field) => SortState::Sorted {
            field,
            direction: if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        },
    }
}
