use std::env::VarError;
use std::fmt;

use log::debug;

use crate::clients::errors::{Error, Result};

/// Spotify accounts service token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Spotify Web API base.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Settings for one release radar run, read once from the environment.
#[derive(Clone)]
pub struct Settings {
    /// `SPOTIFY_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_CLIENT_SECRET`
    pub client_secret: String,
    /// `SPOTIFY_PLAYLIST_ID`
    pub playlist_id: String,
    /// `DISCORD_WEBHOOK_URL`, contains the webhook token
    pub webhook_url: String,
    /// `SPOTIFY_TOKEN_URL`
    pub token_url: String,
    /// `SPOTIFY_API_URL`, without trailing slash
    pub api_url: String,
}

impl Settings {
    /// Settings against the public Spotify endpoints.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        playlist_id: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Settings {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            playlist_id: playlist_id.into(),
            webhook_url: webhook_url.into(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the Spotify calls somewhere other than the public endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create Settings from environment variables or raise a configuration error.
    pub fn try_from_env() -> Result<Self> {
        Settings::from_lookup(|name| std::env::var(name))
    }

    /// Create Settings from any variable source shaped like [`std::env::var`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let required = |name: &str| {
            lookup(name).map_err(|e| {
                Error::ConfigurationError(format!(
                    "{name}: {e}. Check README.md for the required variables."
                ))
            })
        };
        let optional = |name: &str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(Error::from(e)),
        };

        let settings = Settings::new(
            required("SPOTIFY_CLIENT_ID")?,
            required("SPOTIFY_CLIENT_SECRET")?,
            required("SPOTIFY_PLAYLIST_ID")?,
            required("DISCORD_WEBHOOK_URL")?,
        );
        let token_url = optional("SPOTIFY_TOKEN_URL")?.unwrap_or_else(|| settings.token_url.clone());
        let api_url = optional("SPOTIFY_API_URL")?.unwrap_or_else(|| settings.api_url.clone());

        let settings = settings.with_endpoints(token_url, api_url);
        debug!("Loaded settings: {settings:?}");
        Ok(settings)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("playlist_id", &self.playlist_id)
            .field("webhook_url", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}
