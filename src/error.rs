//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard unavailable: {primary}; fallback failed: {fallback}")]
    CopyFailed { primary: String, fallback: String },
}

pub type Result<T> = std::result::Result<T, Error>;
