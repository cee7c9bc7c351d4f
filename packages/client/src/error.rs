//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or the connection dropped
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The server answered the call with an error
    #[error("{0}")]
    Rpc(String),

    /// The reply could not be decoded
    #[error("Invalid reply: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server did not accept the join
    #[error("Join failed: {0}")]
    JoinRejected(String),

    /// Terminal input could not be read
    #[error("Readline error: {0}")]
    Readline(String),
}
