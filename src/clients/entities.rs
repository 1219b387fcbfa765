use serde::Deserialize;
use serde_json::{Map, Value};

/// Client-credentials token as returned by the accounts service.
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    /// Bearer credential for the Web API
    pub access_token: String,
    /// Usually `Bearer`
    #[serde(default)]
    pub token_type: String,
    /// Advertised lifetime in seconds; a new token is requested every run
    #[serde(default)]
    pub expires_in: u64,
}

/// One page of the playlist-tracks listing. Only `items` is consumed.
#[derive(Debug, Deserialize)]
pub struct PlaylistTracksPage {
    /// Link to this page
    #[serde(default)]
    pub href: Option<String>,
    /// Page size
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the following page, never followed
    #[serde(default)]
    pub next: Option<String>,
    /// Position of the first item
    #[serde(default)]
    pub offset: Option<u32>,
    /// Link to the preceding page
    #[serde(default)]
    pub previous: Option<String>,
    /// Entries in the whole playlist
    #[serde(default)]
    pub total: Option<u32>,
    /// Entries on this page
    pub items: Vec<PlaylistTrackEntry>,
}

/// One row of a playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackEntry {
    /// When the track was added, as sent upstream
    #[serde(default)]
    pub added_at: Option<String>,
    /// Opaque user object of whoever added the track
    #[serde(default)]
    pub added_by: Option<Map<String, Value>>,
    /// Uploaded from a local file rather than the catalog
    #[serde(default)]
    pub is_local: bool,
    /// `null` for tracks that were removed or are unavailable
    #[serde(default)]
    pub track: Option<Track>,
}

/// A catalog track.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    /// Catalog id, `null` for local tracks
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// Credited artists in order
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// Public links to the track
    #[serde(default)]
    pub external_urls: ExternalUrls,
    /// Album the track belongs to
    #[serde(default)]
    pub album: Album,
}

/// A credited artist.
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    /// Catalog id
    pub id: Option<String>,
    /// Display name
    pub name: String,
}

/// Public links to a catalog object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    /// `open.spotify.com` link
    pub spotify: Option<String>,
}

/// The album fields used for thumbnails.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Album {
    /// Cover art variants, largest first
    #[serde(default)]
    pub images: Vec<Image>,
}

/// One cover art variant.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    /// Image location
    pub url: String,
    /// Pixel height, sometimes unknown
    pub height: Option<u32>,
    /// Pixel width, sometimes unknown
    pub width: Option<u32>,
}
