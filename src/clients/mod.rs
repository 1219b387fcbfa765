/// Discord webhook client and message payloads
pub mod discord;
/// Data entities for playlist entries, tracks and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use discord::DiscordWebhook;
pub use spotify::SpotifyClient;
