use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

pub const DEFAULT_SCOPE: &str = "user-modify-playback-state user-read-playback-state";

/// Credentials shipped in the env template start with this prefix; they
/// count as unconfigured until replaced.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Spotify credentials and OAuth parameters, read from the environment
/// (`.env` is loaded by `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub token_cache_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID")
                .unwrap_or_else(|_| "YOUR_CLIENT_ID".to_string()),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET")
                .unwrap_or_else(|_| "YOUR_CLIENT_SECRET".to_string()),
            redirect_uri: env::var("SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|_| "http://127.0.0.1:8888/callback".to_string()),
            scope: env::var("SPOTIFY_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            token_cache_path: default_token_cache_path(),
        }
    }

    pub fn credentials_are_configured(&self) -> bool {
        [&self.client_id, &self.client_secret]
            .iter()
            .all(|value| !value.is_empty() && !value.starts_with(PLACEHOLDER_PREFIX))
    }
}

fn default_token_cache_path() -> PathBuf {
    ProjectDirs::from("", "", "remotune")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("token.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(id: &str, secret: &str) -> Config {
        Config {
            client_id: id.to_string(),
            client_secret: secret.to_string(),
            redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            token_cache_path: PathBuf::from("token.json"),
        }
    }

    #[test]
    fn placeholder_credentials_are_not_configured() {
        assert!(!config("YOUR_CLIENT_ID", "YOUR_CLIENT_SECRET").credentials_are_configured());
        assert!(!config("abc123", "YOUR_CLIENT_SECRET").credentials_are_configured());
        assert!(!config("", "").credentials_are_configured());
    }

    #[test]
    fn real_credentials_are_configured() {
        assert!(config("abc123", "s3cret").credentials_are_configured());
    }
}
