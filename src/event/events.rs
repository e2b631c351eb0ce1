use crate::remote::error::RemoteError;
use crate::remote::model::{PlaybackSnapshot, RawDevice, UserIdentity};
use crate::state::results::SearchEntry;

#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    Authenticate,
    Logout,
    SubmitSearch,
    DebouncedSearch(String),
    RefreshDevices { manual: bool },
    PlaySelected,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    SeekForward,
    SeekBackward,

    // Events
    Authenticated { identity: UserIdentity, silent: bool },
    AuthFailed(String),
    SearchCompleted { entries: Vec<SearchEntry>, manual: bool },
    SearchFailed { error: RemoteError, manual: bool },
    DevicesFetched { devices: Vec<RawDevice>, manual: bool },
    DevicesFailed { message: String, manual: bool },
    SnapshotFetched(Option<PlaybackSnapshot>),
    PlaybackStarted,
    PlaybackToggled(bool),
    TransportFailed(RemoteError),
}
