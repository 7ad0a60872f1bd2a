use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use tracing::error;

use crate::context::ExecutionContext;
use crate::presentation::{DashboardSettings, TuiEvent, TuiRenderer};

pub fn handle(ctx: ExecutionContext) -> Result<()> {
    let (page_size, choices) = ctx.config.pagination()?;
    let settings = DashboardSettings {
        page_size,
        choices,
        currency: ctx.config.display.currency.clone(),
        source: ctx.source_label(),
    };

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("catalog-loader".to_string())
        .spawn(move || {
            let event = match ctx.block_on_catalog() {
                Ok(Ok(catalog)) => TuiEvent::Loaded(catalog),
                Ok(Err(e)) => {
                    error!(error = %e, "catalog fetch failed");
                    TuiEvent::Failed(e.to_string())
                }
                Err(e) => {
                    error!(error = %e, "catalog loader could not start");
                    TuiEvent::Failed(format!("{:#}", e))
                }
            };
            // the dashboard may already be gone if the user quit while loading
            let _ = tx.send(event);
        })
        .context("Failed to start catalog loader")?;

    TuiRenderer::new(settings).run(rx)
}
