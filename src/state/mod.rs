pub mod devices;
pub mod playback;
pub mod results;
pub mod session;

pub use devices::DeviceState;
pub use playback::{PlayerPhase, PlayerState};
pub use results::ResultsState;
pub use session::SessionState;

/// Everything the UI renders from, owned by the single mutation point in
/// the event handler. Each slice is replaced as a unit, never partially.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub results: ResultsState,
    pub devices: DeviceState,
    pub player: PlayerState,
}

impl AppState {
    /// Logout path: session, results, devices and playback view are
    /// cleared simultaneously.
    pub fn reset(&mut self) {
        self.session.close();
        self.results.clear();
        self.devices.clear();
        self.player.on_session_closed();
    }
}
