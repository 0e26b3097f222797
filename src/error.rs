// File: src/error.rs
use thiserror::Error;

/// Everything a pratyāhāra query can report instead of a phoneme list.
#[derive(Debug, Error)]
pub enum PratyaharaError {
    #[error("invalid input: start and marker must be non-empty phonemes")]
    InvalidInput,
    #[error("not found: '{0}' does not occur in the alphabet")]
    NotFound(String),
    #[error("start must precede marker: '{start}' does not occur before '{marker}'")]
    OrderViolation { start: String, marker: String },
    #[error("unknown group: '{0}'")]
    UnknownGroup(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PratyaharaError {
    /// Stable machine-readable tag, used in JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            PratyaharaError::InvalidInput => "invalid-input",
            PratyaharaError::NotFound(_) => "not-found",
            PratyaharaError::OrderViolation { .. } => "order-violation",
            PratyaharaError::UnknownGroup(_) => "unknown-group",
            PratyaharaError::Io(_) => "io",
            PratyaharaError::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, PratyaharaError>;
