use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::DashboardViewModel;

const KEY_HINTS: &str = "/ search  t/p sort  ←/→ page  +/- size  q quit";

pub struct StatusBarView<'a> {
    model: &'a DashboardViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = &self.model.stats;
        let mut spans = vec![
            Span::raw(format!("Total: {} products", stats.total_products)),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("Showing: {}", stats.showing)),
        ];
        if stats.showing > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(format!(
                "{}–{} of {}",
                stats.from, stats.to, stats.filtered
            )));
        }

        let stats_line = Line::from(spans);
        let stats_width = stats_line.width() as u16;
        Paragraph::new(stats_line).render(area, buf);

        let hints_width = KEY_HINTS.chars().count() as u16;
        if stats_width + 2 + hints_width <= area.width {
            Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
