//! Error types for the NBA client data layer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    /// Connectivity, timeout, or non-success HTTP status.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Payload did not match the expected schema.
    #[error("JSON decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Invalid date '{input}', expected MM/DD/YYYY or YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),
}

impl NbaError {
    /// True for failures that came from the network rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, NbaError::Transport(_))
    }
}
