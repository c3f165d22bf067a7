//! Error types for the FAQ assistant
//!
//! Only startup-time failures ever reach the binary. Per-query failures are
//! absorbed by the answer pipeline and show up as a lower confidence instead.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by a [`LinguisticEngine`](crate::linguistic::LinguisticEngine)
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be initialised. Fatal at startup.
    #[error("linguistic engine unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported character {ch:?} at byte {offset}")]
    UnsupportedInput { ch: char, offset: usize },

    #[error("input of {len} characters exceeds the {max} character limit")]
    InputTooLong { len: usize, max: usize },
}

/// Failures while reading the FAQ corpus. Never fatal.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("FAQ file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read FAQ file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed FAQ file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Invalid configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?} as a number")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var}: {value} is outside the allowed range [0, 1]")]
    OutOfRange { var: &'static str, value: f32 },

    #[error("{var}: cannot parse {value:?} as a port")]
    InvalidPort { var: &'static str, value: String },
}

/// Crate-level error for startup and serving
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for startup and serving operations
pub type Result<T> = std::result::Result<T, Error>;
