use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};

use crate::{
    ui::{
        app::App,
        components::{
            devices::DevicesWidget, header::HeaderWidget, player::PlayerWidget,
            results::ResultsWidget, search::SearchWidget, status::StatusWidget,
        },
        state::Focus,
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(30)])
            .split(chunks[2]);

        let state = &self.app.state;

        f.render_widget(HeaderWidget::new(state.session.username()), chunks[0]);
        f.render_widget(
            SearchWidget::new(&self.app.query, self.app.focus == Focus::Search),
            chunks[1],
        );
        f.render_widget(
            ResultsWidget::new(
                state.results.entries(),
                state.results.cursor(),
                state.results.selected().map(|entry| entry.label.as_str()),
                self.app.focus == Focus::Results,
            ),
            main_chunks[0],
        );
        f.render_widget(
            DevicesWidget::new(
                state.devices.entries(),
                state.devices.cursor(),
                state.devices.selected_name(),
                self.app.focus == Focus::Devices,
            ),
            main_chunks[1],
        );
        f.render_widget(PlayerWidget::new(&state.player), chunks[3]);
        f.render_widget(StatusWidget::new(self.app.status.as_ref()), chunks[4]);
    }
}
