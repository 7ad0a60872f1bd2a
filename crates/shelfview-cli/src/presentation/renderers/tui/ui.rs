use ratatui::{Frame, layout::Rect};

use super::app::{App, Phase};
use super::popup::{POPUP_WIDTH, ShownPopup, place};
use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::tui::{
    DashboardLayout, DescriptionPopupView, MessageView, PaginationBarView, ProductTableView,
    SearchBarView, StatusBarView,
};

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    match &app.phase {
        Phase::Loading => {
            f.render_widget(MessageView::loading(&app.settings.source), area);
            app.remember_frame(None, None);
        }
        Phase::Failed(reason) => {
            f.render_widget(MessageView::unavailable(reason), area);
            app.remember_frame(None, None);
        }
        Phase::Ready { .. } => {
            let Some(model) = app.view_model() else {
                return;
            };
            let (layout, popup_area) = draw_dashboard(
                f,
                &model,
                app.search_focused,
                app.table_offset,
                app.popup.shown(),
            );
            app.remember_frame(Some(layout), popup_area);
        }
    }
}

/// Draw one dashboard frame and return the geometry it was drawn with
pub(crate) fn draw_dashboard(
    f: &mut Frame,
    model: &DashboardViewModel,
    search_focused: bool,
    table_offset: usize,
    popup: Option<ShownPopup>,
) -> (DashboardLayout, Option<Rect>) {
    let area = f.area();
    let layout = DashboardLayout::compute(area, model, table_offset);

    f.render_widget(
        SearchBarView::new(model, &layout.search, search_focused),
        layout.search.block,
    );
    f.render_widget(
        ProductTableView::new(model, &layout.table),
        layout.table.block,
    );
    f.render_widget(
        PaginationBarView::new(model, &layout.pagination),
        layout.pagination.block,
    );
    f.render_widget(StatusBarView::new(model), layout.status);

    let popup_area = popup.and_then(|shown| {
        let row = model.rows.get(shown.row)?;
        let view = DescriptionPopupView::new(&row.title, &row.description);
        let height = view.height(POPUP_WIDTH.min(area.width));
        let popup_area = place(shown.anchor, area, height);
        f.render_widget(view, popup_area);
        Some(popup_area)
    });

    (layout, popup_area)
}
