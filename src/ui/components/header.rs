use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub struct HeaderWidget<'a> {
    username: Option<&'a str>,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(username: Option<&'a str>) -> Self {
        Self { username }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = match self.username {
            Some(username) => Line::from(format!("  {username} ")).fg(colors::PRIMARY),
            None => Line::from(" not logged in · press 'a' ").fg(colors::NEUTRAL),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(" remotune ")
            .title_style(colors::PRIMARY)
            .title_top(session.right_aligned());

        Paragraph::new("").block(block).render(area, buf);
    }
}
