//! SDK-independent shapes exchanged with the remote service. Search
//! ingestion and the playback view consume these, never `rspotify` models,
//! so the state layer stays headless-testable.

/// What a search result is, which also decides how playback is dispatched:
/// a track plays as a single item, everything else plays as a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Track,
    Album,
    Artist,
    Playlist,
}

impl ResultKind {
    pub fn is_context(self) -> bool {
        !matches!(self, ResultKind::Track)
    }
}

/// The authenticated user, as the header displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// One raw catalog item before ingestion. Fields the catalog did not
/// provide stay `None`; ingestion substitutes the display placeholders.
#[derive(Debug, Clone)]
pub struct RawSearchItem {
    pub kind: ResultKind,
    pub name: Option<String>,
    pub uri: String,
    /// Primary artist name (tracks and albums).
    pub artist: Option<String>,
    /// Owner display name (playlists).
    pub owner: Option<String>,
    /// The item's own artwork references, largest first.
    pub artwork: Vec<String>,
    /// Artwork of the containing album (tracks only).
    pub album_artwork: Vec<String>,
}

impl RawSearchItem {
    pub fn new(kind: ResultKind, uri: impl Into<String>) -> Self {
        Self {
            kind,
            name: None,
            uri: uri.into(),
            artist: None,
            owner: None,
            artwork: Vec::new(),
            album_artwork: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDevice {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
}

/// The item currently loaded on the remote player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub art_url: Option<String>,
    pub duration_ms: u64,
}

/// Point-in-time read of the remote playback status. Always replaced
/// wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub item: Option<NowPlaying>,
    pub progress_ms: u64,
    pub is_playing: bool,
    pub device_id: Option<String>,
}
