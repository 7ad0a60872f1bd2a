use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::formatters::{description_or_placeholder, truncate, wrap};

/// Wrapped description lines shown before the text is cut off
const MAX_LINES: usize = 8;

/// Tooltip with a product's description, drawn over the table
pub struct DescriptionPopupView<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> DescriptionPopupView<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self { title, description }
    }

    /// Rows needed (borders included) at the given outer width
    pub fn height(&self, width: u16) -> u16 {
        self.lines(width).len() as u16 + 2
    }

    fn lines(&self, width: u16) -> Vec<String> {
        let inner_width = width.saturating_sub(2) as usize;
        let mut lines = wrap(description_or_placeholder(self.description), inner_width);
        if lines.len() > MAX_LINES {
            lines.truncate(MAX_LINES);
            if let Some(last) = lines.last_mut() {
                let cut = truncate(last, inner_width.saturating_sub(1));
                *last = format!("{}…", cut.trim_end_matches('…'));
            }
        }
        lines
    }
}

impl Widget for DescriptionPopupView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " {} ",
                truncate(self.title, area.width.saturating_sub(4) as usize)
            ))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let placeholder = self.description.trim().is_empty();
        let text_style = if placeholder {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };

        let lines: Vec<Line> = self
            .lines(area.width)
            .into_iter()
            .map(|line| Line::styled(line, text_style))
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
