use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::Line,
    widgets::Widget,
};

use crate::ui::state::{Status, StatusLevel};
use crate::util::colors;

const HINTS: &str = " Tab panel · Enter select/play · Space play/pause · n/p skip · d devices · q quit";

pub struct StatusWidget<'a> {
    status: Option<&'a Status>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(status: Option<&'a Status>) -> Self {
        Self { status }
    }
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.status {
            Some(status) => {
                let color = match status.level {
                    StatusLevel::Info => colors::PRIMARY,
                    StatusLevel::Warn => colors::WARN,
                    StatusLevel::Error => colors::ERROR,
                };
                Line::from(format!(" {}", status.message)).fg(color)
            }
            None => Line::from(HINTS.fg(colors::NEUTRAL)),
        };
        line.render(area, buf);
    }
}
