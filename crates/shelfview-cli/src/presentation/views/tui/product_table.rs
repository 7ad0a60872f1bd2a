use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::layout::{Column, HINT_GLYPH, TableLayout};
use crate::presentation::formatters::{category_label, format_price, image_label, truncate};
use crate::presentation::view_models::{DashboardViewModel, ProductRowViewModel};

pub struct ProductTableView<'a> {
    model: &'a DashboardViewModel,
    layout: &'a TableLayout,
}

impl<'a> ProductTableView<'a> {
    pub fn new(model: &'a DashboardViewModel, layout: &'a TableLayout) -> Self {
        Self { model, layout }
    }

    fn render_header(&self, buf: &mut Buffer) {
        for column in Column::ALL {
            let mut label = column.label().to_string();
            let mut style = Style::default().add_modifier(Modifier::BOLD);

            if let Some(field) = column.sort_field() {
                style = style.add_modifier(Modifier::UNDERLINED);
                if let Some(direction) = self.model.sort_direction(field) {
                    label = format!("{} {}", label, direction.arrow());
                    style = style.fg(Color::Yellow);
                }
            }

            let cell = self.layout.cell(column, self.layout.header);
            buf.set_stringn(cell.x, cell.y, &label, cell.width as usize, style);
        }
    }

    fn render_row(&self, row: &ProductRowViewModel, line: Rect, buf: &mut Buffer) {
        for column in Column::ALL {
            let cell = self.layout.cell(column, line);
            let width = cell.width as usize;

            let (text, style) = match column {
                Column::Number => (
                    format!("{:>width$}", row.row_number, width = width),
                    Style::default().fg(Color::DarkGray),
                ),
                Column::Title => (truncate(&row.title, width), Style::default()),
                Column::Hint => (HINT_GLYPH.to_string(), Style::default().fg(Color::Cyan)),
                Column::Price => (
                    truncate(&format_price(row.price, &self.model.currency), width),
                    Style::default().fg(Color::Green),
                ),
                Column::Category => (
                    truncate(category_label(row.category.as_deref()), width),
                    Style::default().fg(Color::Magenta),
                ),
                Column::Image => (
                    truncate(&image_label(row.image_url.as_deref()), width),
                    Style::default().fg(Color::DarkGray),
                ),
            };

            buf.set_stringn(cell.x, cell.y, &text, width, style);
        }
    }
}

impl Widget for ProductTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Products ({}) ", self.model.stats.filtered))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        self.render_header(buf);

        if let Some(message) = &self.model.empty_message {
            let body = Rect::new(
                inner.x,
                inner.y + 1,
                inner.width,
                inner.height.saturating_sub(1),
            );
            Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(body, buf);
            return;
        }

        for slot in &self.layout.rows {
            if let Some(row) = self.model.rows.get(slot.index) {
                self.render_row(row, slot.area, buf);
            }
        }
    }
}
