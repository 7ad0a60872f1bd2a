use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Centered box for the loading and failure screens
pub struct MessageView<'a> {
    title: &'a str,
    lines: Vec<String>,
    color: Color,
}

impl<'a> MessageView<'a> {
    pub fn loading(source: &str) -> Self {
        Self {
            title: " Loading ",
            lines: vec![
                "Loading products…".to_string(),
                String::new(),
                source.to_string(),
            ],
            color: Color::Cyan,
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            title: " Data unavailable ",
            lines: vec![
                "The product catalog could not be loaded.".to_string(),
                String::new(),
                reason.to_string(),
                String::new(),
                "Press q to quit".to_string(),
            ],
            color: Color::Red,
        }
    }
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.lines.len() as u16 + 4).min(area.height);
        let width = area.width.min(70);
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, boxed, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(column);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .title_style(
                Style::default()
                    .fg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(self.color));

        let lines: Vec<Line> = self.lines.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(boxed, buf);
    }
}
