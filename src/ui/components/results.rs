use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::remote::model::ResultKind;
use crate::state::results::SearchEntry;
use crate::util::colors;

pub struct ResultsWidget<'a> {
    entries: &'a [SearchEntry],
    cursor: usize,
    selected: Option<&'a str>,
    focused: bool,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(
        entries: &'a [SearchEntry],
        cursor: usize,
        selected: Option<&'a str>,
        focused: bool,
    ) -> Self {
        Self {
            entries,
            cursor,
            selected,
            focused,
        }
    }
}

impl<'a> Widget for ResultsWidget<'a> {
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
            .title(" Results ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Line::from("Type a query and press Enter".fg(colors::NEUTRAL)).render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = scroll_offset(self.cursor, self.entries.len(), visible);
        let label_width = inner.width.saturating_sub(6) as usize;

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, entry)| {
                let is_selected = self.selected == Some(entry.label.as_str());
                let marker = if is_selected { "●" } else { " " };
                let text = format!(
                    "{marker} {} {}",
                    kind_glyph(entry.kind),
                    fit_width(&entry.label, label_width)
                );

                let mut style = Style::new().fg(colors::TEXT);
                if is_selected {
                    style = style.fg(colors::PRIMARY);
                }
                if index == self.cursor && self.focused {
                    style = style.bg(colors::SECONDARY);
                }
                ListItem::new(text).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

fn kind_glyph(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Track => "󰎆",
        ResultKind::Album => "󰀥",
        ResultKind::Artist => "",
        ResultKind::Playlist => "󰲸",
    }
}

/// First index to draw so the cursor stays inside the window.
fn scroll_offset(cursor: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    cursor
        .saturating_sub(visible.saturating_sub(1))
        .min(len - visible)
}

/// Clips `text` to `max` terminal columns, ellipsizing wide text instead
/// of splitting a double-width character in half.
fn fit_width(text: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}
