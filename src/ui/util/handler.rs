use std::time::Duration;

use ratatui::crossterm::event::KeyEvent;
use tracing::{debug, warn};

use crate::{
    controller::{ToggleOutcome, playback::POLL_INTERVAL},
    event::events::Event,
    remote::error::RemoteError,
    ui::{
        app::App,
        input::{InputHandler, KeyAction},
        state::{Focus, Status},
        tui::{TerminalEvent, Tui},
    },
};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
const SEEK_STEP_MS: u64 = 5000;

/// The single mutation point: every state change flows through here, on
/// the main loop. Spawned tasks only ever report back via events.
pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt, tui).await?;
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        _tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => Self::restore_session(app),
            TerminalEvent::FocusGained => app.has_focus = true,
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
        }

        Ok(())
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        let authenticated = app.state.session.is_authenticated();
        let Some(action) = InputHandler::map_key(evt, app.focus, authenticated) else {
            return;
        };

        match action {
            KeyAction::Quit => app.should_quit = true,
            KeyAction::FocusNext => app.focus = app.focus.next(),
            KeyAction::FocusPrevious => app.focus = app.focus.previous(),
            KeyAction::InsertChar(c) => {
                app.query.push(c);
                Self::schedule_debounced_search(app);
            }
            KeyAction::DeleteChar => {
                if app.query.pop().is_some() {
                    Self::schedule_debounced_search(app);
                }
            }
            KeyAction::Submit => {
                let _ = app.event_tx.send(Event::SubmitSearch);
            }
            KeyAction::CursorUp => match app.focus {
                Focus::Results => app.state.results.cursor_up(),
                Focus::Devices => app.state.devices.cursor_up(),
                Focus::Search => {}
            },
            KeyAction::CursorDown => match app.focus {
                Focus::Results => app.state.results.cursor_down(),
                Focus::Devices => app.state.devices.cursor_down(),
                Focus::Search => {}
            },
            KeyAction::Activate => match app.focus {
                Focus::Results => {
                    app.state.results.select_at_cursor();
                    let _ = app.event_tx.send(Event::PlaySelected);
                }
                Focus::Devices => app.state.devices.select_at_cursor(),
                Focus::Search => {}
            },
            KeyAction::TogglePlayPause => {
                let _ = app.event_tx.send(Event::TogglePlayPause);
            }
            KeyAction::NextTrack => {
                let _ = app.event_tx.send(Event::NextTrack);
            }
            KeyAction::PreviousTrack => {
                let _ = app.event_tx.send(Event::PreviousTrack);
            }
            KeyAction::SeekForward => {
                let _ = app.event_tx.send(Event::SeekForward);
            }
            KeyAction::SeekBackward => {
                let _ = app.event_tx.send(Event::SeekBackward);
            }
            KeyAction::RefreshDevices => {
                let _ = app.event_tx.send(Event::RefreshDevices { manual: true });
            }
            KeyAction::Authenticate => {
                let _ = app.event_tx.send(Event::Authenticate);
            }
            KeyAction::Logout => {
                let _ = app.event_tx.send(Event::Logout);
            }
        }
    }

    pub async fn handle_action(
        app: &mut App,
        evt: Event,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            Event::Authenticate => {
                // The login prompt needs a cooked terminal, so the
                // alternate screen is suspended around it.
                tui.exit()?;
                let result = app.auth.login().await;
                tui.enter()?;

                match result {
                    Ok(identity) => {
                        let _ = app.event_tx.send(Event::Authenticated {
                            identity,
                            silent: false,
                        });
                    }
                    Err(e) => {
                        let _ = app.event_tx.send(Event::AuthFailed(e.to_string()));
                    }
                }
            }
            Event::Authenticated { identity, silent } => {
                debug!("session opened for {}", identity.display_name);
                if !silent {
                    app.status = Some(Status::info(format!(
                        "Logged in as {}",
                        identity.display_name
                    )));
                }
                app.state.session.open(identity);
                app.state.player.on_session_opened();
                let _ = app.event_tx.send(Event::RefreshDevices { manual: false });
                Self::start_poll(app);
            }
            Event::AuthFailed(message) => {
                warn!("login failed: {message}");
                app.status = Some(Status::error(message));
            }
            Event::Logout => {
                app.tasks.abort_all();
                let auth = app.auth.clone();
                tokio::spawn(async move {
                    let _ = auth.logout().await;
                });
                app.state.reset();
                app.query.clear();
                app.focus = Focus::Search;
                app.status = Some(Status::info("Logged out"));
            }
            Event::SubmitSearch => {
                app.tasks.abort("search_debounce");
                let query = app.query.clone();
                Self::spawn_search(app, query, true);
            }
            Event::DebouncedSearch(query) => {
                if query.trim().is_empty() {
                    app.state.results.clear();
                } else {
                    Self::spawn_search(app, query, false);
                }
            }
            Event::SearchCompleted { entries, manual } => {
                if manual && entries.is_empty() {
                    app.status = Some(Status::warn("No results"));
                }
                app.state.results.replace(entries);
            }
            Event::SearchFailed { error, manual } => {
                if !manual {
                    // Debounced lookups fail silently.
                    return Ok(());
                }
                app.status = Some(match error {
                    RemoteError::EmptyQuery => Status::warn("Type something to search"),
                    RemoteError::NotAuthenticated => Status::warn("Log in first (press 'a')"),
                    _ => Status::error(format!("Search failed: {error}")),
                });
            }
            Event::RefreshDevices { manual } => {
                let devices = app.devices.clone();
                let tx = app.event_tx.clone();
                app.tasks.spawn(
                    "devices",
                    tokio::spawn(async move {
                        match devices.refresh().await {
                            Ok(devices) => {
                                let _ = tx.send(Event::DevicesFetched { devices, manual });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::DevicesFailed {
                                    message: e.to_string(),
                                    manual,
                                });
                            }
                        }
                    }),
                );
            }
            Event::DevicesFetched { devices, manual } => {
                app.state.devices.replace(devices);
                if manual && app.state.devices.is_empty() {
                    app.status = Some(Status::warn("No devices available"));
                }
            }
            Event::DevicesFailed { message, manual } => {
                if manual {
                    app.status = Some(Status::error(format!("Device refresh failed: {message}")));
                }
            }
            Event::PlaySelected => {
                let entry = app.state.results.selected().cloned();
                let device_id = app.state.devices.selected_id().map(str::to_string);

                let playback = app.playback.clone();
                let tx = app.event_tx.clone();
                app.tasks.spawn(
                    "playback",
                    tokio::spawn(async move {
                        match playback
                            .play_selected(entry.as_ref(), device_id.as_deref())
                            .await
                        {
                            Ok(()) => {
                                let _ = tx.send(Event::PlaybackStarted);
                            }
                            Err(e) => {
                                let _ = tx.send(Event::TransportFailed(e));
                            }
                        }
                    }),
                );
            }
            Event::PlaybackStarted => {
                app.state.player.on_playback_started();
                app.state.results.clear_selection();
                Self::start_poll(app);
            }
            Event::TogglePlayPause => {
                let entry = app.state.results.selected().cloned();
                let selected_device = app.state.devices.selected_id().map(str::to_string);
                let snapshot_device = app.state.player.active_device_id().map(str::to_string);
                let is_playing = app.state.player.is_playing();

                let playback = app.playback.clone();
                let tx = app.event_tx.clone();
                app.tasks.spawn(
                    "playback",
                    tokio::spawn(async move {
                        let outcome = playback
                            .toggle(
                                entry.as_ref(),
                                selected_device.as_deref(),
                                snapshot_device.as_deref(),
                                is_playing,
                            )
                            .await;
                        let _ = match outcome {
                            Ok(ToggleOutcome::Started) => tx.send(Event::PlaybackStarted),
                            Ok(ToggleOutcome::Paused) => tx.send(Event::PlaybackToggled(false)),
                            Ok(ToggleOutcome::Resumed) => tx.send(Event::PlaybackToggled(true)),
                            Err(e) => tx.send(Event::TransportFailed(e)),
                        };
                    }),
                );
            }
            Event::PlaybackToggled(playing) => {
                app.state.player.set_playing(playing);
                Self::start_poll(app);
            }
            Event::NextTrack => {
                let playback = app.playback.clone();
                let tx = app.event_tx.clone();
                let device = Self::transport_device(app);
                app.tasks.spawn(
                    "playback",
                    tokio::spawn(async move {
                        match playback.next(device.as_deref()).await {
                            Ok(()) => Self::report_snapshot(&playback, &tx).await,
                            Err(e) => {
                                let _ = tx.send(Event::TransportFailed(e));
                            }
                        }
                    }),
                );
            }
            Event::PreviousTrack => {
                let playback = app.playback.clone();
                let tx = app.event_tx.clone();
                let device = Self::transport_device(app);
                app.tasks.spawn(
                    "playback",
                    tokio::spawn(async move {
                        match playback.previous(device.as_deref()).await {
                            Ok(()) => Self::report_snapshot(&playback, &tx).await,
                            Err(e) => {
                                let _ = tx.send(Event::TransportFailed(e));
                            }
                        }
                    }),
                );
            }
            Event::SeekForward => Self::seek_relative(app, SEEK_STEP_MS as i64),
            Event::SeekBackward => Self::seek_relative(app, -(SEEK_STEP_MS as i64)),
            Event::SnapshotFetched(snapshot) => {
                app.state.player.apply(snapshot);
            }
            Event::TransportFailed(error) => {
                app.status = Some(match error {
                    RemoteError::NoSelection => Status::warn("Nothing selected"),
                    RemoteError::NoDevice => {
                        Status::warn("No device available (press 'd' to refresh)")
                    }
                    _ => Status::error(error.to_string()),
                });
            }
        }

        Ok(())
    }

    fn restore_session(app: &mut App) {
        let auth = app.auth.clone();
        let tx = app.event_tx.clone();
        app.tasks.spawn(
            "auth",
            tokio::spawn(async move {
                if let Some(identity) = auth.restore().await {
                    let _ = tx.send(Event::Authenticated {
                        identity,
                        silent: true,
                    });
                }
            }),
        );
    }

    fn schedule_debounced_search(app: &mut App) {
        let tx = app.event_tx.clone();
        let query = app.query.clone();
        app.tasks.spawn_after("search_debounce", SEARCH_DEBOUNCE, async move {
            let _ = tx.send(Event::DebouncedSearch(query));
        });
    }

    fn spawn_search(app: &mut App, query: String, manual: bool) {
        let search = app.search.clone();
        let authenticated = app.state.session.is_authenticated();
        let tx = app.event_tx.clone();
        app.tasks.spawn(
            "search",
            tokio::spawn(async move {
                match search.search(&query, authenticated).await {
                    Ok(entries) => {
                        let _ = tx.send(Event::SearchCompleted { entries, manual });
                    }
                    Err(error) => {
                        let _ = tx.send(Event::SearchFailed { error, manual });
                    }
                }
            }),
        );
    }

    /// Restarts the snapshot poll, which also forces an immediate fetch.
    /// The loop stops silently on a fetch error and resumes on the next
    /// transport action.
    fn start_poll(app: &mut App) {
        let playback = app.playback.clone();
        let tx = app.event_tx.clone();
        app.tasks.spawn(
            "poll",
            tokio::spawn(async move {
                loop {
                    let Ok(snapshot) = playback.poll_once().await else {
                        break;
                    };
                    if tx.send(Event::SnapshotFetched(snapshot)).is_err() {
                        break;
                    }
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }),
        );
    }

    fn seek_relative(app: &mut App, delta_ms: i64) {
        if !app.state.player.controls_enabled() {
            return;
        }
        let target = app
            .state
            .player
            .progress_ms()
            .saturating_add_signed(delta_ms)
            .min(app.state.player.duration_ms());

        let playback = app.playback.clone();
        let tx = app.event_tx.clone();
        let device = Self::transport_device(app);
        app.tasks.spawn(
            "playback",
            tokio::spawn(async move {
                match playback.seek(target, device.as_deref()).await {
                    Ok(()) => Self::report_snapshot(&playback, &tx).await,
                    Err(e) => {
                        let _ = tx.send(Event::TransportFailed(e));
                    }
                }
            }),
        );
    }

    /// Transport targets the device Spotify reports as active, falling
    /// back to the one picked in the devices panel.
    fn transport_device(app: &App) -> Option<String> {
        app.state
            .player
            .active_device_id()
            .or_else(|| app.state.devices.selected_id())
            .map(str::to_string)
    }

    async fn report_snapshot(
        playback: &crate::controller::PlaybackController,
        tx: &flume::Sender<Event>,
    ) {
        if let Ok(snapshot) = playback.poll_once().await {
            let _ = tx.send(Event::SnapshotFetched(snapshot));
        }
    }
}
