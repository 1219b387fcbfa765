use log::debug;
use reqwest::Client;

use crate::clients::{
    entities::{AccessToken, PlaylistTrackEntry, PlaylistTracksPage},
    errors::{Error, Result, Stage},
};
use crate::config::Settings;

/// Spotify accounts and Web API client for one run.
pub struct SpotifyClient {
    http: Client,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Client against explicit token and API base URLs.
    pub fn new(http: Client, token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        SpotifyClient {
            http,
            token_url: token_url.into(),
            api_url: api_url.into(),
        }
    }

    /// Client against the endpoints named in `settings`.
    pub fn from_settings(http: Client, settings: &Settings) -> Self {
        SpotifyClient::new(http, &settings.token_url, &settings.api_url)
    }

    /// Exchange client credentials for a short-lived bearer token.
    pub async fn request_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AccessToken> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ];
        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(Error::transport(Stage::Auth))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::AuthFailure { status, body });
        }

        let token: AccessToken = response
            .json()
            .await
            .map_err(Error::transport(Stage::Auth))?;
        debug!(
            "Received {} token valid for {}s",
            token.token_type, token.expires_in
        );
        Ok(token)
    }

    /// Fetch the first page of a playlist's tracks, in the order the API returns them.
    pub async fn get_playlist_tracks(
        &self,
        playlist_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<PlaylistTrackEntry>> {
        let url = format!("{}/playlists/{}/tracks", self.api_url, playlist_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(Error::transport(Stage::Fetch))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::FetchFailure { status, body });
        }

        let page: PlaylistTracksPage = response
            .json()
            .await
            .map_err(Error::transport(Stage::Fetch))?;
        if let Some(next) = &page.next {
            // Only the first page is announced
            debug!("Playlist has more entries at {next}, ignoring");
        }
        debug!(
            "Fetched {} of {:?} playlist entries",
            page.items.len(),
            page.total
        );
        Ok(page.items)
    }
}
