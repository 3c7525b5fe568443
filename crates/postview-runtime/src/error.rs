use std::fmt;

use crate::browser::{FailureKind, LoadFailure};
use postview_types::PostId;

/// Result type for postview-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Network or transport failure, including non-success HTTP status
    FetchFailed { origin: String, reason: String },

    /// Response was not a valid array of post records
    DecodeFailed {
        origin: String,
        error: postview_types::Error,
    },

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// No post with the requested id
    NotFound(PostId),
}

impl Error {
    pub(crate) fn fetch(origin: impl Into<String>, reason: impl fmt::Display) -> Self {
        Error::FetchFailed {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Map a load error onto the failure shown to the user.
    pub fn failure(&self) -> LoadFailure {
        let kind = match self {
            Error::DecodeFailed { .. } => FailureKind::DecodeFailed,
            _ => FailureKind::FetchFailed,
        };
        LoadFailure {
            kind,
            message: self.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FetchFailed { origin, reason } => {
                write!(f, "Failed to fetch posts from {}: {}", origin, reason)
            }
            Error::DecodeFailed { origin, error } => {
                write!(f, "Invalid post data from {}: {}", origin, error)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::NotFound(id) => write!(f, "Post {} not found", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DecodeFailed { error, .. } => Some(error),
            Error::Io(err) => Some(err),
            Error::FetchFailed { .. } | Error::Config(_) | Error::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
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
