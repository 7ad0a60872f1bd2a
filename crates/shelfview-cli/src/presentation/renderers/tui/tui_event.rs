use shelfview_engine::Catalog;

/// Messages from the loader thread to the dashboard
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Loaded(Catalog),
    /// The fetch failed; the dashboard shows this reason until quit
    Failed(String),
}
