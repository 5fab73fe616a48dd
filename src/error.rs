//! Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not valid JSON or does not match the node model,
    /// including nodes of an unrecognised kind.
    #[error("invalid documentation payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("unknown format: {0}. Use html or markdown")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
