//! Radarcast - post the newest tracks of a Spotify playlist to Discord
//!
//! Each run requests a client-credentials token, reads the first page of a
//! playlist and posts up to ten of its tracks to a Discord webhook.

/// Client modules for the Spotify Web API and Discord webhooks
pub mod clients;
/// Settings read from the environment
pub mod config;
/// The authenticate, fetch, notify pipeline
pub mod radar;
/// Background and periodic execution of the pipeline
pub mod trigger;
