use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

const PLACEHOLDER: &str = "Search tracks, albums, artists, playlists";

pub struct SearchWidget<'a> {
    query: &'a str,
    focused: bool,
}

impl<'a> SearchWidget<'a> {
    pub fn new(query: &'a str, focused: bool) -> Self {
        Self { query, focused }
    }
}

impl<'a> Widget for SearchWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };

        let content = if self.query.is_empty() && !self.focused {
            Line::from(PLACEHOLDER.fg(colors::NEUTRAL))
        } else {
            let mut line = Line::from(Span::raw(self.query).fg(colors::TEXT));
            if self.focused {
                line.push_span("█".fg(colors::PRIMARY));
            }
            line
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_color)
            .title(" Search ");

        Paragraph::new(content).block(block).render(area, buf);
    }
}
