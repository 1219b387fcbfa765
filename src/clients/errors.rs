use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The pipeline step an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Client-credentials token exchange
    Auth,
    /// Playlist tracks request
    Fetch,
    /// Webhook delivery
    Notify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Auth => "token",
            Stage::Fetch => "playlist",
            Stage::Notify => "discord notify",
        })
    }
}

/// Everything that can end a run early.
#[derive(Error, Debug)]
pub enum Error {
    /// Token endpoint answered with a non-success status.
    #[error("failed request token status: {status}: {body}")]
    AuthFailure {
        /// Response status
        status: StatusCode,
        /// Response body text
        body: String,
    },

    /// Playlist endpoint answered with a non-success status.
    #[error("Failed to get playlist items status: {status}: {body}")]
    FetchFailure {
        /// Response status
        status: StatusCode,
        /// Response body text
        body: String,
    },

    /// Webhook answered with a non-success status.
    #[error("Failed to notify to discord status: {status}: {body}")]
    NotifyFailure {
        /// Response status
        status: StatusCode,
        /// Response body text
        body: String,
    },

    /// Upstream data the notifier cannot turn into an embed.
    #[error("Malformed playlist data: {0}")]
    MalformedData(String),

    /// The request could not be sent or its response could not be decoded.
    #[error("{stage} request failed: {source}")]
    Transport {
        /// Step that was running
        stage: Stage,
        /// Underlying client error
        source: reqwest::Error,
    },

    /// Missing or unreadable settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl Error {
    pub(crate) fn transport(stage: Stage) -> impl FnOnce(reqwest::Error) -> Error {
        move |source| Error::Transport { stage, source }
    }

    /// HTTP status carried by a stage failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::AuthFailure { status, .. }
            | Error::FetchFailure { status, .. }
            | Error::NotifyFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The pipeline step that failed, if the error came from one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::AuthFailure { .. } => Some(Stage::Auth),
            Error::FetchFailure { .. } => Some(Stage::Fetch),
            Error::NotifyFailure { .. } | Error::MalformedData(_) => Some(Stage::Notify),
            Error::Transport { stage, .. } => Some(*stage),
            Error::ConfigurationError(_) => None,
        }
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
