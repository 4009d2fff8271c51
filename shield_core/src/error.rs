use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShieldError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid config: {0}")]
    Config(String),
}

pub type ShieldResult<T> = Result<T, ShieldError>;
