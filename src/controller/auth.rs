use std::sync::Arc;

use crate::remote::error::RemoteError;
use crate::remote::model::UserIdentity;
use crate::remote::service::RemoteService;

/// Session lifecycle over the remote service: interactive login, silent
/// restore at startup, logout.
#[derive(Clone)]
pub struct AuthController {
    service: Arc<dyn RemoteService>,
}

impl AuthController {
    pub fn new(service: Arc<dyn RemoteService>) -> Self {
        Self { service }
    }

    pub async fn login(&self) -> Result<UserIdentity, RemoteError> {
        self.service.authenticate().await
    }

    /// Cache-based restore. Any failure is "not authenticated", never an
    /// error the caller has to show.
    pub async fn restore(&self) -> Option<UserIdentity> {
        self.service.try_authenticate_from_cache().await
    }

    pub async fn logout(&self) -> Result<(), RemoteError> {
        self.service.logout().await
    }
}
