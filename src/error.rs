// SPDX-License-Identifier: MPL-2.0
use crate::domain::media::MediaUrl;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Player(PlayerError),
    Export(ExportError),
}

/// Errors returned by the player lifecycle manager.
///
/// Playback failures reported by the media layer are not represented here: they are
/// surfaced as events and leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// A session for this URL is already running; tear it down before restarting.
    SessionAlreadyActive(MediaUrl),

    /// The operation needs a session but none is active.
    NoActiveSession,

    /// A report arrived for a session that has since been torn down.
    StaleSession,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::SessionAlreadyActive(url) => {
                write!(f, "A playback session is already active for {}", url)
            }
            PlayerError::NoActiveSession => write!(f, "No active playback session"),
            PlayerError::StaleSession => write!(f, "Report for a stale playback session"),
        }
    }
}

/// Errors produced by the media export (save to library) collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The user or the platform refused access to the media library.
    PermissionDenied,

    /// The item has no content that can be exported (e.g. a placeholder).
    Unsupported,

    /// Export failed with a raw message from the platform.
    Failed(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::PermissionDenied => write!(f, "Access to the media library was denied"),
            ExportError::Unsupported => write!(f, "This item cannot be saved"),
            ExportError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Player(e) => write!(f, "Player Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlayerError> for Error {
    fn from(err: PlayerError) -> Self {
        Error::Player(err)
    }
}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Error::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
