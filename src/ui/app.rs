use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;

use crate::{
    controller::{AuthController, DeviceController, PlaybackController, SearchController},
    event::events::Event,
    remote::service::RemoteService,
    state::AppState,
    util::task::TaskManager,
};

use super::{
    layout::AppLayout,
    state::{Focus, Status},
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub auth: AuthController,
    pub search: SearchController,
    pub devices: DeviceController,
    pub playback: PlaybackController,
    pub state: AppState,
    pub tasks: TaskManager,
    pub query: String,
    pub focus: Focus,
    pub status: Option<Status>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(service: Arc<dyn RemoteService>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            auth: AuthController::new(service.clone()),
            search: SearchController::new(service.clone()),
            devices: DeviceController::new(service.clone()),
            playback: PlaybackController::new(service),
            state: AppState::default(),
            tasks: TaskManager::new(),
            query: String::new(),
            focus: Focus::Search,
            status: None,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(self).render(frame, frame.area());
        }
    }
}
