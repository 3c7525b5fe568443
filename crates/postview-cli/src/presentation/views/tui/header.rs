//! Header View Component
//!
//! One bordered line with the screen title and the source being browsed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ScreenViewModel;

pub struct HeaderView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                self.model.header.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.model.source.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
