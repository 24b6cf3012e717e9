use thiserror::Error;

#[derive(Debug, Error)]
pub enum OncolyxError {
    #[error("Malformed criterium: {0}")]
    MalformedCriterium(String),

    #[error("Unsupported criterium category: {0}")]
    UnsupportedCriterium(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OncolyxError>;
