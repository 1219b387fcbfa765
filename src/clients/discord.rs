use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::clients::{
    entities::{PlaylistTrackEntry, Track},
    errors::{Error, Result, Stage},
};

/// Fixed message body sent with every notification.
pub const CONTENT: &str = "Weekly Release Rador";
/// Discord accepts at most ten embeds per message.
pub const MAX_EMBEDS: usize = 10;

/// JSON body posted to the webhook.
#[derive(Debug, Serialize)]
pub struct NotificationPayload {
    /// Plain message text, always [`CONTENT`]
    pub content: String,
    /// One embed per track, in playlist order
    pub embeds: Vec<Embed>,
}

/// Rich card describing one track.
#[derive(Debug, Serialize)]
pub struct Embed {
    /// Track name
    pub title: String,
    /// Artist line
    pub author: EmbedAuthor,
    /// Link to the track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Album cover
    pub thumbnail: EmbedThumbnail,
}

/// Author block of an embed.
#[derive(Debug, Serialize)]
pub struct EmbedAuthor {
    /// Comma separated artist names
    pub name: String,
}

/// Thumbnail block of an embed.
#[derive(Debug, Serialize)]
pub struct EmbedThumbnail {
    /// Image location
    pub url: String,
    /// Pixel height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Pixel width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl TryFrom<&Track> for Embed {
    type Error = Error;

    fn try_from(track: &Track) -> Result<Embed> {
        let image = track.album.images.first().ok_or_else(|| {
            Error::MalformedData(format!("track {:?} has no album images", track.name))
        })?;

        Ok(Embed {
            title: track.name.clone(),
            author: EmbedAuthor {
                name: artist_names(track),
            },
            url: track.external_urls.spotify.clone(),
            thumbnail: EmbedThumbnail {
                url: image.url.clone(),
                height: image.height,
                width: image.width,
            },
        })
    }
}

// "A, B, C" in artist-list order, empty when there are no artists
fn artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl NotificationPayload {
    /// Build the message for the first [`MAX_EMBEDS`] entries, in playlist order.
    ///
    /// Entries past the cap are never inspected.
    pub fn from_entries(entries: &[PlaylistTrackEntry]) -> Result<Self> {
        let embeds = entries
            .iter()
            .take(MAX_EMBEDS)
            .enumerate()
            .map(|(position, entry)| {
                let track = entry.track.as_ref().ok_or_else(|| {
                    Error::MalformedData(format!("playlist entry {position} has no track"))
                })?;
                Embed::try_from(track)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(NotificationPayload {
            content: CONTENT.to_string(),
            embeds,
        })
    }
}

/// Poster for one Discord webhook URL.
pub struct DiscordWebhook {
    http: Client,
    url: String,
}

impl DiscordWebhook {
    /// The URL embeds the webhook token and is kept out of error messages.
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        DiscordWebhook {
            http,
            url: url.into(),
        }
    }

    /// Format the entries and post them; nothing is sent if formatting fails.
    pub async fn notify(&self, entries: &[PlaylistTrackEntry]) -> Result<()> {
        let payload = NotificationPayload::from_entries(entries)?;
        debug!("Posting {} embeds to webhook", payload.embeds.len());
        self.send(&payload).await
    }

    /// Post an already built payload.
    pub async fn send(&self, payload: &NotificationPayload) -> Result<()> {
        let response = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Transport {
                stage: Stage::Notify,
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::NotifyFailure { status, body });
        }
        Ok(())
    }
}
