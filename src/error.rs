use thiserror::Error;

use crate::domain::rotation::RotationError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors while fetching the remote quote catalog.
///
/// All of these are recoverable: the caller falls back to the cached
/// catalog copy, and failing that to the built-in placeholder quote.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("catalog source returned HTTP {status}")]
    Status { status: u16 },

    #[error("catalog body is not a quote array: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Errors against the local JSON state files.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} holds corrupt JSON: {source}")]
    Corrupt {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {name}: {source}")]
    Write {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Rotation(#[from] RotationError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
