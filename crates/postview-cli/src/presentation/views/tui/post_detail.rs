//! Post Detail View Component

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct PostDetailView<'a> {
    id: u64,
    title: &'a str,
    body: &'a str,
}

impl<'a> PostDetailView<'a> {
    pub fn new(id: u64, title: &'a str, body: &'a str) -> Self {
        Self { id, title, body }
    }
}

impl<'a> Widget for PostDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];
        lines.extend(self.body.lines().map(Line::raw));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" Post {} ", self.id))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
