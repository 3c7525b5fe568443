//! Post List View Component
//!
//! Renders the list body with the highlighted row kept in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::view_models::ListItemViewModel;

pub struct PostListView<'a> {
    items: &'a [ListItemViewModel],
    cursor: usize,
    loading: bool,
}

impl<'a> PostListView<'a> {
    pub fn new(items: &'a [ListItemViewModel], cursor: usize, loading: bool) -> Self {
        Self {
            items,
            cursor,
            loading,
        }
    }
}

impl<'a> Widget for PostListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} posts ", self.items.len()))
            .borders(Borders::ALL);

        if self.items.is_empty() {
            let placeholder = if self.loading {
                "Loading..."
            } else {
                "No posts"
            };
            Paragraph::new(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let id_width = self
            .items
            .iter()
            .map(|item| item.id.to_string().len())
            .max()
            .unwrap_or(1);

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", item.id, width = id_width),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(item.title.as_str()),
                ]))
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
