use std::sync::Arc;

use crate::remote::error::RemoteError;
use crate::remote::model::RawDevice;
use crate::remote::service::RemoteService;

/// Device listing. An empty result is a valid, reportable state, not an
/// error; selection handling is pure state (`state::devices`).
#[derive(Clone)]
pub struct DeviceController {
    service: Arc<dyn RemoteService>,
}

impl DeviceController {
    pub fn new(service: Arc<dyn RemoteService>) -> Self {
        Self { service }
    }

    pub async fn refresh(&self) -> Result<Vec<RawDevice>, RemoteError> {
        self.service.list_devices().await
    }
}
