//! Error types for batch generation.

use thiserror::Error;

/// Result type alias for batch generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for batch generation operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error reading the sentence list or writing audio.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing synthesizer failed.
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}
