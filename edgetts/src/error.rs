//! Error types for the Edge read-aloud TTS client.

use thiserror::Error;

/// Result type alias for Edge TTS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Edge TTS operations.
#[derive(Error, Debug)]
pub enum Error {
    /// WebSocket error.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed or unexpected protocol frame.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The service closed the turn without sending any audio.
    #[error("no audio received (request {0})")]
    NoAudio(String),
}
