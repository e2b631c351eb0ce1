use crate::remote::model::{NowPlaying, PlaybackSnapshot};

/// Remote playback as the UI sees it. `Idle` means no session; `Ready`
/// means authenticated with nothing playing; the snapshot drives the
/// `Playing`/`Paused` split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    #[default]
    Idle,
    Ready,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    phase: PlayerPhase,
    snapshot: Option<PlaybackSnapshot>,
}

impl PlayerState {
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn on_session_opened(&mut self) {
        if self.phase == PlayerPhase::Idle {
            self.phase = PlayerPhase::Ready;
        }
    }

    pub fn on_session_closed(&mut self) {
        self.phase = PlayerPhase::Idle;
        self.snapshot = None;
    }

    /// Eager transition after a successful start-playback call; the next
    /// poll tick confirms it.
    pub fn on_playback_started(&mut self) {
        if self.phase != PlayerPhase::Idle {
            self.phase = PlayerPhase::Playing;
        }
    }

    /// Eager transition after a successful pause/resume call.
    pub fn set_playing(&mut self, playing: bool) {
        if matches!(self.phase, PlayerPhase::Playing | PlayerPhase::Paused) {
            self.phase = if playing {
                PlayerPhase::Playing
            } else {
                PlayerPhase::Paused
            };
            if let Some(snapshot) = &mut self.snapshot {
                snapshot.is_playing = playing;
            }
        }
    }

    /// Applies one poll tick. A snapshot without a current item (or no
    /// snapshot at all) drops back to `Ready` and clears the display.
    pub fn apply(&mut self, snapshot: Option<PlaybackSnapshot>) {
        if self.phase == PlayerPhase::Idle {
            // Stale tick delivered after logout.
            return;
        }
        match snapshot {
            Some(snapshot) if snapshot.item.is_some() => {
                self.phase = if snapshot.is_playing {
                    PlayerPhase::Playing
                } else {
                    PlayerPhase::Paused
                };
                self.snapshot = Some(snapshot);
            }
            _ => {
                self.phase = PlayerPhase::Ready;
                self.snapshot = None;
            }
        }
    }

    pub fn controls_enabled(&self) -> bool {
        matches!(self.phase, PlayerPhase::Playing | PlayerPhase::Paused)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlayerPhase::Playing
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.snapshot.as_ref()?.item.as_ref()
    }

    pub fn progress_ms(&self) -> u64 {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.progress_ms)
            .unwrap_or(0)
    }

    pub fn duration_ms(&self) -> u64 {
        self.now_playing()
            .map(|item| item.duration_ms)
            .unwrap_or(0)
    }

    /// Displayed progress, clamped to [0, 100].
    pub fn progress_percent(&self) -> u16 {
        let duration = self.duration_ms();
        if duration == 0 {
            return 0;
        }
        ((self.progress_ms() * 100) / duration).min(100) as u16
    }

    pub fn active_device_id(&self) -> Option<&str> {
        self.snapshot.as_ref()?.device_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(title: &str, progress_ms: u64, is_playing: bool) -> PlaybackSnapshot {
        PlaybackSnapshot {
            item: Some(NowPlaying {
                title: title.to_string(),
                artist: "The Beatles".to_string(),
                art_url: None,
                duration_ms: 180_000,
            }),
            progress_ms,
            is_playing,
            device_id: Some("id1".to_string()),
        }
    }

    fn empty_snapshot() -> PlaybackSnapshot {
        PlaybackSnapshot {
            item: None,
            progress_ms: 0,
            is_playing: false,
            device_id: None,
        }
    }

    #[test]
    fn poll_sequence_playing_paused_then_ready() {
        let mut player = PlayerState::default();
        player.on_session_opened();

        player.apply(Some(snapshot("Yesterday", 1_000, true)));
        assert_eq!(player.phase(), PlayerPhase::Playing);
        assert!(player.controls_enabled());

        player.apply(Some(snapshot("Yesterday", 2_000, false)));
        assert_eq!(player.phase(), PlayerPhase::Paused);
        assert!(player.controls_enabled());

        player.apply(Some(empty_snapshot()));
        assert_eq!(player.phase(), PlayerPhase::Ready);
        assert!(!player.controls_enabled());
        assert!(player.now_playing().is_none());
    }

    #[test]
    fn missing_snapshot_also_drops_to_ready() {
        let mut player = PlayerState::default();
        player.on_session_opened();
        player.apply(Some(snapshot("Yesterday", 1_000, true)));
        player.apply(None);
        assert_eq!(player.phase(), PlayerPhase::Ready);
    }

    #[test]
    fn snapshot_is_ignored_while_idle() {
        let mut player = PlayerState::default();
        player.apply(Some(snapshot("Yesterday", 1_000, true)));
        assert_eq!(player.phase(), PlayerPhase::Idle);
        assert!(player.now_playing().is_none());
    }

    #[test]
    fn progress_percent_is_clamped() {
        let mut player = PlayerState::default();
        player.on_session_opened();

        player.apply(Some(snapshot("Yesterday", 90_000, true)));
        assert_eq!(player.progress_percent(), 50);

        // Progress past the reported duration still displays as 100%.
        player.apply(Some(snapshot("Yesterday", 200_000, true)));
        assert_eq!(player.progress_percent(), 100);
    }

    #[test]
    fn session_close_clears_snapshot_and_phase() {
        let mut player = PlayerState::default();
        player.on_session_opened();
        player.apply(Some(snapshot("Yesterday", 1_000, true)));

        player.on_session_closed();
        assert_eq!(player.phase(), PlayerPhase::Idle);
        assert!(player.now_playing().is_none());
        assert_eq!(player.progress_ms(), 0);
    }

    #[test]
    fn set_playing_flips_only_active_phases() {
        let mut player = PlayerState::default();
        player.on_session_opened();
        player.set_playing(false);
        assert_eq!(player.phase(), PlayerPhase::Ready);

        player.apply(Some(snapshot("Yesterday", 1_000, true)));
        player.set_playing(false);
        assert_eq!(player.phase(), PlayerPhase::Paused);
        player.set_playing(true);
        assert_eq!(player.phase(), PlayerPhase::Playing);
    }
}
