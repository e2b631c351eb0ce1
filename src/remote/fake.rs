//! Scripted in-memory [`RemoteService`] for controller tests. Records
//! every call so tests can assert what did (or did not) reach the service.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::remote::error::RemoteError;
use crate::remote::model::{
    PlaybackSnapshot, RawDevice, RawSearchItem, ResultKind, UserIdentity,
};
use crate::remote::service::RemoteService;

#[derive(Default)]
pub struct FakeRemote {
    pub calls: Mutex<Vec<String>>,
    pub identity: Mutex<Option<UserIdentity>>,
    pub search_items: Mutex<Vec<RawSearchItem>>,
    pub devices: Mutex<Vec<RawDevice>>,
    /// Snapshots returned by successive `current_playback` calls; once
    /// drained, further calls return `Ok(None)`.
    pub snapshots: Mutex<VecDeque<Option<PlaybackSnapshot>>>,
    pub fail_search: bool,
    pub fail_previous: bool,
    pub fail_playback: bool,
    pub fail_current_playback: bool,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_items(items: Vec<RawSearchItem>) -> Self {
        let fake = Self::new();
        *fake.search_items.lock().unwrap() = items;
        fake
    }

    pub fn push_snapshot(&self, snapshot: Option<PlaybackSnapshot>) {
        self.snapshots.lock().unwrap().push_back(snapshot);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl RemoteService for FakeRemote {
    async fn authenticate(&self) -> Result<UserIdentity, RemoteError> {
        self.record("authenticate");
        self.identity
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| RemoteError::Auth("login refused".to_string()))
    }

    async fn try_authenticate_from_cache(&self) -> Option<UserIdentity> {
        self.record("try_authenticate_from_cache");
        self.identity.lock().unwrap().clone()
    }

    async fn logout(&self) -> Result<(), RemoteError> {
        self.record("logout");
        Ok(())
    }

    async fn search(
        &self,
        query: &str,
        per_kind_limit: u32,
    ) -> Result<Vec<RawSearchItem>, RemoteError> {
        self.record(format!("search:{query}:{per_kind_limit}"));
        if self.fail_search {
            return Err(RemoteError::Service("search unavailable".to_string()));
        }
        Ok(self.search_items.lock().unwrap().clone())
    }

    async fn list_devices(&self) -> Result<Vec<RawDevice>, RemoteError> {
        self.record("list_devices");
        Ok(self.devices.lock().unwrap().clone())
    }

    async fn start_track(&self, device_id: &str, uri: &str) -> Result<(), RemoteError> {
        self.record(format!("start_track:{device_id}:{uri}"));
        if self.fail_playback {
            return Err(RemoteError::Service("playback refused".to_string()));
        }
        Ok(())
    }

    async fn start_context(
        &self,
        device_id: &str,
        uri: &str,
        _kind: ResultKind,
    ) -> Result<(), RemoteError> {
        self.record(format!("start_context:{device_id}:{uri}"));
        if self.fail_playback {
            return Err(RemoteError::Service("playback refused".to_string()));
        }
        Ok(())
    }

    async fn pause(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.record(format!("pause:{}", device_id.unwrap_or("-")));
        Ok(())
    }

    async fn resume(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.record(format!("resume:{}", device_id.unwrap_or("-")));
        Ok(())
    }

    async fn next(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.record(format!("next:{}", device_id.unwrap_or("-")));
        Ok(())
    }

    async fn previous(&self, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.record(format!("previous:{}", device_id.unwrap_or("-")));
        if self.fail_previous {
            return Err(RemoteError::Service("no previous track".to_string()));
        }
        Ok(())
    }

    async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<(), RemoteError> {
        self.record(format!("seek:{position_ms}:{}", device_id.unwrap_or("-")));
        Ok(())
    }

    async fn current_playback(&self) -> Result<Option<PlaybackSnapshot>, RemoteError> {
        self.record("current_playback");
        if self.fail_current_playback {
            return Err(RemoteError::Service("status unavailable".to_string()));
        }
        Ok(self.snapshots.lock().unwrap().pop_front().flatten())
    }
}
