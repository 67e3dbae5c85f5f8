//! Client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status} for {endpoint}")]
    UnexpectedStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode reply: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
