use log::{debug, info};
use reqwest::Client;

use crate::clients::{DiscordWebhook, SpotifyClient, errors::Result};
use crate::config::Settings;

/// Configuration for the [`ReleaseRadar`] struct
pub struct Config {
    /// Credentials and target playlist
    pub settings: Settings,
    /// Authenticator and catalog fetcher
    pub spotify: SpotifyClient,
    /// Notifier
    pub discord: DiscordWebhook,
}

/// Assembles a [`Config`], reading the environment for anything not supplied.
pub struct ConfigBuilder {
    settings: Option<Settings>,
    http: Option<Client>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Builder with nothing supplied yet.
    pub fn new() -> Self {
        Self {
            settings: None,
            http: None, // One client shared by all three calls
        }
    }

    /// Use these settings instead of the environment.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Use this HTTP client for every request.
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> Result<Config> {
        let settings = match self.settings {
            Some(s) => s,
            None => Settings::try_from_env()?,
        };
        let http = self.http.unwrap_or_default();
        Ok(Config {
            spotify: SpotifyClient::from_settings(http.clone(), &settings),
            discord: DiscordWebhook::new(http, &settings.webhook_url),
            settings,
        })
    }
}

/// Runs the authenticate, fetch, notify pipeline once per call.
pub struct ReleaseRadar {
    config: Config,
}

impl ReleaseRadar {
    /// Runner over a built configuration.
    pub fn new(config: Config) -> Self {
        ReleaseRadar { config }
    }

    /// Perform one run. Returns the number of playlist entries fetched.
    ///
    /// Stops at the first failing stage; later stages are never called.
    pub async fn run(&self) -> Result<usize> {
        let settings = &self.config.settings;

        info!("Requesting Spotify access token ...");
        let token = self
            .config
            .spotify
            .request_access_token(&settings.client_id, &settings.client_secret)
            .await?;

        info!("Fetching playlist {} ...", settings.playlist_id);
        let entries = self
            .config
            .spotify
            .get_playlist_tracks(&settings.playlist_id, &token)
            .await?;
        debug!("Fetched {} playlist entries", entries.len());

        info!("Notifying Discord ...");
        self.config.discord.notify(&entries).await?;

        Ok(entries.len())
    }
}
