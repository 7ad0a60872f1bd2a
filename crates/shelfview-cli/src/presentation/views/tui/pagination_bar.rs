use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use super::layout::{Control, ControlKind, PaginationLayout};
use crate::presentation::view_models::DashboardViewModel;

pub struct PaginationBarView<'a> {
    model: &'a DashboardViewModel,
    layout: &'a PaginationLayout,
}

impl<'a> PaginationBarView<'a> {
    pub fn new(model: &'a DashboardViewModel, layout: &'a PaginationLayout) -> Self {
        Self { model, layout }
    }
}

fn control_style(control: &Control) -> Style {
    if control.active {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
    }
    match (control.kind, &control.action) {
        (ControlKind::Ellipsis, _) | (_, None) => Style::default().fg(Color::DarkGray),
        (ControlKind::PageSize(_), Some(_)) => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    }
}

impl Widget for PaginationBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Page {} of {} ",
                self.model.pagination.page, self.model.pagination.total_pages
            ))
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        if let Some(label) = self.layout.size_label {
            buf.set_stringn(
                label.x,
                label.y,
                PaginationLayout::size_label_text(),
                label.width as usize,
                Style::default().fg(Color::DarkGray),
            );
        }

        for control in &self.layout.controls {
            buf.set_stringn(
                control.area.x,
                control.area.y,
                &control.label,
                control.area.width as usize,
                control_style(control),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_dashboard;
    use crate::presentation::views::tui::layout::DashboardLayout;
    use crate::presentation::views::tui::test_support::buffer_lines;
    use shelfview_engine::{DashboardAction, DashboardState};
    use shelfview_testing::numbered_products;
    use shelfview_types::{PageSize, PageSizeChoices};

    #[test]
    fn test_bar_lists_pages_and_sizes() {
        let products = numbered_products(50);
        let state = DashboardState::new(PageSize::new(5).unwrap())
            .apply(DashboardAction::GoToPage(5), &products);
        let choices = PageSizeChoices::new(&[5, 10, 20]).unwrap();
        let vm = present_dashboard(&state.project(&products), "", state.sort, &choices, "VND");

        let layout = DashboardLayout::compute(Rect::new(0, 0, 80, 20), &vm, 0);
        let area = layout.pagination.block;
        let mut buf = Buffer::empty(area);
        PaginationBarView::new(&vm, &layout.pagination).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        insta::assert_snapshot!(lines.join("\n"), @r"
        ┌ Page 5 of 10 ────────────────────────────────────────────────────────────────┐
        │‹ Prev  1  …  4   5   6  …  10  Next ›                Per page:  5   10   20  │
        └──────────────────────────────────────────────────────────────────────────────┘
        ");
    }

    #[test]
    fn test_active_page_is_highlighted() {
        let products = numbered_products(12);
        let state = DashboardState::new(PageSize::new(5).unwrap())
            .apply(DashboardAction::GoToPage(2), &products);
        let choices = PageSizeChoices::new(&[5]).unwrap();
        let vm = present_dashboard(&state.project(&products), "", state.sort, &choices, "VND");

        let layout = DashboardLayout::compute(Rect::new(0, 0, 80, 20), &vm, 0);
        let area = layout.pagination.block;
        let mut buf = Buffer::empty(area);
        PaginationBarView::new(&vm, &layout.pagination).render(area, &mut buf);

        let current = layout
            .pagination
            .controls
            .iter()
            .find(|control| control.kind == ControlKind::Page(2))
            .unwrap();
        assert_eq!(buf[(current.area.x + 1, current.area.y)].bg, Color::Cyan);
    }
}
