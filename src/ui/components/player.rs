use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::ToSpan,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::state::{PlayerPhase, PlayerState};
use crate::util::{colors, format::format_time};

pub struct PlayerWidget<'a> {
    player: &'a PlayerState,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(player: &'a PlayerState) -> Self {
        Self { player }
    }
}

impl<'a> Widget for PlayerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match (self.player.phase(), self.player.now_playing()) {
            (_, Some(item)) => {
                let icon = if self.player.is_playing() { "" } else { "" };
                format!(" {icon}  {} – {} ", item.title, item.artist)
            }
            (PlayerPhase::Idle, _) => " Not connected ".to_string(),
            _ => " Nothing playing ".to_string(),
        };

        let duration = self.player.duration_ms();
        let progress = self.player.progress_ms().min(duration);
        let label = format!(
            "{} / -{}",
            format_time(progress),
            format_time(duration.saturating_sub(progress)),
        );

        let (bar_fg, bar_bg) = if self.player.controls_enabled() {
            (colors::PRIMARY, colors::SECONDARY)
        } else {
            (colors::NEUTRAL, colors::BACKGROUND)
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title_top(title)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(bar_fg),
            )
            .gauge_style(Style::new().fg(bar_fg).bg(bar_bg))
            .percent(self.player.progress_percent())
            .label(label.to_span().fg(colors::TEXT));

        gauge.render(area, buf);
    }
}
