use std::sync::Arc;
use std::time::Duration;

use crate::remote::error::RemoteError;
use crate::remote::model::PlaybackSnapshot;
use crate::remote::service::RemoteService;
use crate::state::results::SearchEntry;

/// Below this offset from track start, the previous-track button skips
/// back a track; at or above it, it restarts the current one.
pub const PREVIOUS_RESTART_THRESHOLD_MS: u64 = 3000;

pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// What a toggle ended up doing, so the view can update eagerly before
/// the next poll tick confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started,
    Paused,
    Resumed,
}

#[derive(Clone)]
pub struct PlaybackController {
    service: Arc<dyn RemoteService>,
}

impl PlaybackController {
    pub fn new(service: Arc<dyn RemoteService>) -> Self {
        Self { service }
    }

    /// Starts the entry on the given device: single-item playback for a
    /// track, context playback for everything else.
    pub async fn play(&self, entry: &SearchEntry, device_id: &str) -> Result<(), RemoteError> {
        if entry.kind.is_context() {
            self.service
                .start_context(device_id, &entry.uri, entry.kind)
                .await
        } else {
            self.service.start_track(device_id, &entry.uri).await
        }
    }

    /// Enter on a result: refuses before any service call when nothing is
    /// selected or no device id resolves.
    pub async fn play_selected(
        &self,
        entry: Option<&SearchEntry>,
        device_id: Option<&str>,
    ) -> Result<(), RemoteError> {
        let entry = entry.ok_or(RemoteError::NoSelection)?;
        let device_id = device_id.ok_or(RemoteError::NoDevice)?;
        self.play(entry, device_id).await
    }

    /// Play/pause button. A selected entry takes precedence and always
    /// (re)starts that entry; otherwise pause/resume targets the device
    /// active in the latest snapshot, falling back to the UI selection.
    pub async fn toggle(
        &self,
        selected_entry: Option<&SearchEntry>,
        selected_device_id: Option<&str>,
        snapshot_device_id: Option<&str>,
        is_playing: bool,
    ) -> Result<ToggleOutcome, RemoteError> {
        if let Some(entry) = selected_entry {
            let device_id = selected_device_id.ok_or(RemoteError::NoDevice)?;
            self.play(entry, device_id).await?;
            return Ok(ToggleOutcome::Started);
        }

        let device_id = snapshot_device_id
            .or(selected_device_id)
            .ok_or(RemoteError::NoDevice)?;
        if is_playing {
            self.service.pause(Some(device_id)).await?;
            Ok(ToggleOutcome::Paused)
        } else {
            self.service.resume(Some(device_id)).await?;
            Ok(ToggleOutcome::Resumed)
        }
    }

    pub async fn next(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.service.next(device_id).await
    }

    /// Previous button with the usual media-player behavior: close to the
    /// start of the track, try to skip back a track and fall back to a
    /// restart when there is none; further in, always restart. A missing
    /// snapshot or current item makes this a no-op.
    pub async fn previous(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        let snapshot = match self.service.current_playback().await {
            Ok(snapshot) => snapshot,
            // Best-effort read; nothing to act on.
            Err(_) => return Ok(()),
        };
        let Some(snapshot) = snapshot else {
            return Ok(());
        };
        if snapshot.item.is_none() {
            return Ok(());
        }

        if snapshot.progress_ms < PREVIOUS_RESTART_THRESHOLD_MS {
            match self.service.previous(device_id).await {
                Ok(()) => Ok(()),
                // No previous track in the context; restart this one.
                Err(_) => self.service.seek(0, device_id).await,
            }
        } else {
            self.service.seek(0, device_id).await
        }
    }

    pub async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.service.seek(position_ms, device_id).await
    }

    /// One poll tick. Callers run ticks sequentially so a slow fetch can
    /// never overlap the next one.
    pub async fn poll_once(&self) -> Result<Option<PlaybackSnapshot>, RemoteError> {
        self.service.current_playback().await
    }
}
