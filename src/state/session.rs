use crate::remote::model::UserIdentity;

/// Whether a user identity is currently established. The avatar is only
/// meaningful alongside a username; both are cleared together, never
/// independently.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    username: Option<String>,
    avatar_url: Option<String>,
}

impl SessionState {
    pub fn open(&mut self, identity: UserIdentity) {
        self.username = Some(identity.display_name);
        self.avatar_url = identity.avatar_url;
    }

    pub fn close(&mut self) {
        self.username = None;
        self.avatar_url = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}
