use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::layout::SearchLayout;
use crate::presentation::view_models::DashboardViewModel;

const PLACEHOLDER: &str = "Press / to search by title";

pub struct SearchBarView<'a> {
    model: &'a DashboardViewModel,
    layout: &'a SearchLayout,
    focused: bool,
}

impl<'a> SearchBarView<'a> {
    pub fn new(model: &'a DashboardViewModel, layout: &'a SearchLayout, focused: bool) -> Self {
        Self {
            model,
            layout,
            focused,
        }
    }
}

impl Widget for SearchBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border)
            .render(area, buf);

        let line = if self.model.search.is_empty() && !self.focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::raw(self.model.search.as_str())];
            if self.focused {
                spans.push(Span::styled(
                    "_",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };
        Paragraph::new(line).render(self.layout.input, buf);

        if let Some(clear) = self.layout.clear {
            Paragraph::new(Span::styled("✕ clear", Style::default().fg(Color::Red)))
                .render(clear, buf);
        }
    }
}
