use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::state::devices::DeviceEntry;
use crate::util::colors;

pub struct DevicesWidget<'a> {
    entries: &'a [DeviceEntry],
    cursor: usize,
    selected_name: Option<&'a str>,
    focused: bool,
}

impl<'a> DevicesWidget<'a> {
    pub fn new(
        entries: &'a [DeviceEntry],
        cursor: usize,
        selected_name: Option<&'a str>,
        focused: bool,
    ) -> Self {
        Self {
            entries,
            cursor,
            selected_name,
            focused,
        }
    }
}

impl<'a> Widget for DevicesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_color)
            .title(" Devices ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Line::from("No devices available".fg(colors::NEUTRAL)).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let is_selected = self.selected_name == Some(entry.name.as_str());
                let marker = if is_selected { "●" } else { " " };

                let mut style = Style::new().fg(colors::TEXT);
                if is_selected {
                    style = style.fg(colors::PRIMARY);
                }
                if index == self.cursor && self.focused {
                    style = style.bg(colors::SECONDARY);
                }
                ListItem::new(format!("{marker} 󰓃 {}", entry.name)).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
