//! Status Bar View Component
//!
//! Renders the load status on the left and key hints for the current body on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusLineViewModel;

use super::status_level_to_color;

const LIST_HINTS: &[(&str, &str)] = &[
    ("[j/k]", " move "),
    ("[enter]", " open "),
    ("[r]", "efresh "),
    ("[q]", "uit"),
];
const DETAIL_HINTS: &[(&str, &str)] = &[("[b]", "ack "), ("[r]", "efresh "), ("[q]", "uit")];

pub struct StatusBarView<'a> {
    model: &'a StatusLineViewModel,
    in_detail: bool,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusLineViewModel, in_detail: bool) -> Self {
        Self { model, in_detail }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        Paragraph::new(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ))
        .render(chunks[0], buf);

        let hints = if self.in_detail {
            DETAIL_HINTS
        } else {
            LIST_HINTS
        };
        let help_line = Line::from(
            hints
                .iter()
                .flat_map(|(key, rest)| {
                    [
                        Span::styled(*key, Style::default().fg(Color::Yellow)),
                        Span::raw(*rest),
                    ]
                })
                .collect::<Vec<_>>(),
        );
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
