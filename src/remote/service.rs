use async_trait::async_trait;
use chrono::TimeDelta;
use rspotify::model::{
    AdditionalType, AlbumId, ArtistId, CurrentPlaybackContext, Device, FullArtist, FullTrack,
    PlayContextId, PlayableId, PlayableItem, PlaylistId, SearchResult, SearchType,
    SimplifiedAlbum, SimplifiedPlaylist, TrackId,
};
use rspotify::prelude::*;
use rspotify::{AuthCodeSpotify, Config as RspotifyConfig, Credentials, OAuth};
use tracing::{debug, info};

use crate::config::Config;
use crate::remote::error::RemoteError;
use crate::remote::model::{
    NowPlaying, PlaybackSnapshot, RawDevice, RawSearchItem, ResultKind, UserIdentity,
};

/// Everything the UI consumes from the remote catalog/playback service.
/// Controllers talk to this trait only; `SpotifyRemote` is the production
/// implementation and tests script a fake.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Interactive OAuth login. Needs a cooked terminal, so the caller
    /// suspends the TUI around it.
    async fn authenticate(&self) -> Result<UserIdentity, RemoteError>;

    /// Restores a session from the persisted token cache. Every failure
    /// shape (absent, expired, malformed) collapses to `None`; silent
    /// restore must never interrupt startup.
    async fn try_authenticate_from_cache(&self) -> Option<UserIdentity>;

    /// Drops the session and deletes the token cache. A missing cache
    /// file is success.
    async fn logout(&self) -> Result<(), RemoteError>;

    /// Four-kind catalog search requesting `per_kind_limit` items of each
    /// kind, returned in kind order: tracks, albums, artists, playlists.
    async fn search(
        &self,
        query: &str,
        per_kind_limit: u32,
    ) -> Result<Vec<RawSearchItem>, RemoteError>;

    async fn list_devices(&self) -> Result<Vec<RawDevice>, RemoteError>;

    async fn start_track(&self, device_id: &str, uri: &str) -> Result<(), RemoteError>;

    async fn start_context(
        &self,
        device_id: &str,
        uri: &str,
        kind: ResultKind,
    ) -> Result<(), RemoteError>;

    async fn pause(&self, device_id: Option<&str>) -> Result<(), RemoteError>;

    async fn resume(&self, device_id: Option<&str>) -> Result<(), RemoteError>;

    async fn next(&self, device_id: Option<&str>) -> Result<(), RemoteError>;

    async fn previous(&self, device_id: Option<&str>) -> Result<(), RemoteError>;

    async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<(), RemoteError>;

    async fn current_playback(&self) -> Result<Option<PlaybackSnapshot>, RemoteError>;
}

/// `rspotify`-backed implementation of [`RemoteService`].
pub struct SpotifyRemote {
    client: AuthCodeSpotify,
    config: Config,
}

impl SpotifyRemote {
    pub fn new(config: Config) -> Self {
        let creds = Credentials::new(&config.client_id, &config.client_secret);
        let oauth = OAuth {
            redirect_uri: config.redirect_uri.clone(),
            scopes: config.scope.split_whitespace().map(str::to_owned).collect(),
            ..Default::default()
        };
        let rspotify_config = RspotifyConfig {
            cache_path: config.token_cache_path.clone(),
            token_cached: true,
            ..Default::default()
        };
        let client = AuthCodeSpotify::with_config(creds, oauth, rspotify_config);
        Self { client, config }
    }

    async fn clear_token(&self) {
        if let Ok(mut token) = self.client.token.lock().await {
            *token = None;
        }
    }

    async fn identity(&self) -> Result<UserIdentity, RemoteError> {
        let user = self.client.me().await.map_err(auth_err)?;
        let display_name = user
            .display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| user.id.id().to_string());
        let avatar_url = user
            .images
            .unwrap_or_default()
            .first()
            .map(|image| image.url.clone());
        Ok(UserIdentity {
            display_name,
            avatar_url,
        })
    }
}

#[async_trait]
impl RemoteService for SpotifyRemote {
    async fn authenticate(&self) -> Result<UserIdentity, RemoteError> {
        if !self.config.credentials_are_configured() {
            return Err(RemoteError::CredentialsMissing);
        }
        let url = self.client.get_authorize_url(false).map_err(auth_err)?;
        self.client.prompt_for_token(&url).await.map_err(auth_err)?;
        let identity = self.identity().await?;
        info!("authenticated as {}", identity.display_name);
        Ok(identity)
    }

    async fn try_authenticate_from_cache(&self) -> Option<UserIdentity> {
        let token = self.client.read_token_cache(true).await.ok().flatten()?;
        let expired = token.is_expired();
        *self.client.token.lock().await.ok()? = Some(token);
        if expired && self.client.refresh_token().await.is_err() {
            self.clear_token().await;
            return None;
        }
        match self.identity().await {
            Ok(identity) => {
                info!("session restored from token cache");
                Some(identity)
            }
            Err(err) => {
                debug!("silent authentication failed: {err}");
                self.clear_token().await;
                None
            }
        }
    }

    async fn logout(&self) -> Result<(), RemoteError> {
        self.clear_token().await;
        match std::fs::remove_file(&self.config.token_cache_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(RemoteError::Service(err.to_string())),
        }
    }

    async fn search(
        &self,
        query: &str,
        per_kind_limit: u32,
    ) -> Result<Vec<RawSearchItem>, RemoteError> {
        let limit = Some(per_kind_limit);
        let (tracks, albums, artists, playlists) = tokio::try_join!(
            self.client
                .search(query, SearchType::Track, None, None, limit, None),
            self.client
                .search(query, SearchType::Album, None, None, limit, None),
            self.client
                .search(query, SearchType::Artist, None, None, limit, None),
            self.client
                .search(query, SearchType::Playlist, None, None, limit, None),
        )
        .map_err(service_err)?;

        let mut items = Vec::new();
        if let SearchResult::Tracks(page) = tracks {
            items.extend(page.items.into_iter().map(raw_from_track));
        }
        if let SearchResult::Albums(page) = albums {
            items.extend(page.items.into_iter().map(raw_from_album));
        }
        if let SearchResult::Artists(page) = artists {
            items.extend(page.items.into_iter().map(raw_from_artist));
        }
        if let SearchResult::Playlists(page) = playlists {
            items.extend(page.items.into_iter().map(raw_from_playlist));
        }
        Ok(items)
    }

    async fn list_devices(&self) -> Result<Vec<RawDevice>, RemoteError> {
        let devices = self.client.device().await.map_err(service_err)?;
        Ok(devices.into_iter().map(raw_from_device).collect())
    }

    async fn start_track(&self, device_id: &str, uri: &str) -> Result<(), RemoteError> {
        let id = TrackId::from_uri(uri).map_err(service_err)?;
        self.client
            .start_uris_playback([PlayableId::Track(id)], Some(device_id), None, None)
            .await
            .map_err(service_err)
    }

    async fn start_context(
        &self,
        device_id: &str,
        uri: &str,
        kind: ResultKind,
    ) -> Result<(), RemoteError> {
        let context = match kind {
            ResultKind::Track => return self.start_track(device_id, uri).await,
            ResultKind::Album => PlayContextId::Album(AlbumId::from_uri(uri).map_err(service_err)?),
            ResultKind::Artist => {
                PlayContextId::Artist(ArtistId::from_uri(uri).map_err(service_err)?)
            }
            ResultKind::Playlist => {
                PlayContextId::Playlist(PlaylistId::from_uri(uri).map_err(service_err)?)
            }
        };
        self.client
            .start_context_playback(context, Some(device_id), None, None)
            .await
            .map_err(service_err)
    }

    async fn pause(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.client
            .pause_playback(device_id)
            .await
            .map_err(service_err)
    }

    async fn resume(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.client
            .resume_playback(device_id, None)
            .await
            .map_err(service_err)
    }

    async fn next(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.client.next_track(device_id).await.map_err(service_err)
    }

    async fn previous(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.client
            .previous_track(device_id)
            .await
            .map_err(service_err)
    }

    async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<(), RemoteError> {
        let position = TimeDelta::milliseconds(position_ms as i64);
        self.client
            .seek_track(position, device_id)
            .await
            .map_err(service_err)
    }

    async fn current_playback(&self) -> Result<Option<PlaybackSnapshot>, RemoteError> {
        let context = self
            .client
            .current_playback(None, Some(&[AdditionalType::Track]))
            .await
            .map_err(service_err)?;
        Ok(context.map(snapshot_from))
    }
}

fn auth_err(err: impl std::fmt::Display) -> RemoteError {
    RemoteError::Auth(err.to_string())
}

fn service_err(err: impl std::fmt::Display) -> RemoteError {
    RemoteError::Service(err.to_string())
}

fn raw_from_track(track: FullTrack) -> RawSearchItem {
    RawSearchItem {
        kind: ResultKind::Track,
        name: Some(track.name),
        uri: track.id.map(|id| id.uri()).unwrap_or_default(),
        artist: track.artists.first().map(|artist| artist.name.clone()),
        owner: None,
        artwork: Vec::new(),
        album_artwork: image_urls(&track.album.images),
    }
}

fn raw_from_album(album: SimplifiedAlbum) -> RawSearchItem {
    RawSearchItem {
        kind: ResultKind::Album,
        name: Some(album.name),
        uri: album.id.map(|id| id.uri()).unwrap_or_default(),
        artist: album.artists.first().map(|artist| artist.name.clone()),
        owner: None,
        artwork: image_urls(&album.images),
        album_artwork: Vec::new(),
    }
}

fn raw_from_artist(artist: FullArtist) -> RawSearchItem {
    RawSearchItem {
        kind: ResultKind::Artist,
        name: Some(artist.name),
        uri: artist.id.uri(),
        artist: None,
        owner: None,
        artwork: image_urls(&artist.images),
        album_artwork: Vec::new(),
    }
}

fn raw_from_playlist(playlist: SimplifiedPlaylist) -> RawSearchItem {
    RawSearchItem {
        kind: ResultKind::Playlist,
        name: Some(playlist.name),
        uri: playlist.id.uri(),
        artist: None,
        owner: playlist.owner.display_name.clone(),
        artwork: image_urls(&playlist.images),
        album_artwork: Vec::new(),
    }
}

fn raw_from_device(device: Device) -> RawDevice {
    RawDevice {
        id: device.id,
        name: device.name,
        is_active: device.is_active,
    }
}

fn snapshot_from(context: CurrentPlaybackContext) -> PlaybackSnapshot {
    let item = context.item.and_then(|item| match item {
        PlayableItem::Track(track) => Some(NowPlaying {
            title: track.name,
            artist: track
                .artists
                .iter()
                .map(|artist| artist.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            art_url: track.album.images.first().map(|image| image.url.clone()),
            duration_ms: track.duration.num_milliseconds().max(0) as u64,
        }),
        PlayableItem::Episode(episode) => Some(NowPlaying {
            title: episode.name,
            artist: episode.show.name,
            art_url: episode.images.first().map(|image| image.url.clone()),
            duration_ms: episode.duration.num_milliseconds().max(0) as u64,
        }),
        // Item kinds the catalog model does not describe display as
        // nothing playing.
        PlayableItem::Unknown(_) => None,
    });
    PlaybackSnapshot {
        item,
        progress_ms: context
            .progress
            .map(|progress| progress.num_milliseconds().max(0) as u64)
            .unwrap_or(0),
        is_playing: context.is_playing,
        device_id: context.device.id,
    }
}

fn image_urls(images: &[rspotify::model::Image]) -> Vec<String> {
    images.iter().map(|image| image.url.clone()).collect()
}
