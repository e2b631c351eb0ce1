use thiserror::Error;

/// Failures at the remote-service boundary. Whether a variant reaches the
/// status line is decided at the call site: user-initiated flows surface
/// it, background flows drop it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Spotify credentials are not configured; set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET")]
    CredentialsMissing,

    #[error("no active Spotify session")]
    NotAuthenticated,

    #[error("empty search query")]
    EmptyQuery,

    #[error("no playback device available")]
    NoDevice,

    #[error("no result selected")]
    NoSelection,

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("Spotify request failed: {0}")]
    Service(String),
}
