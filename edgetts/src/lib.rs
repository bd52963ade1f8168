//! Microsoft Edge read-aloud TTS client for Rust.
//!
//! This crate provides a client for the speech synthesis service behind
//! the Edge browser's read-aloud feature.
//!
//! # Features
//!
//! - TTS (Text-to-Speech): one-shot and streaming synthesis over WebSocket
//! - Voices: catalogue listing with locale filtering
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parlons_edgetts::{Client, SynthesisRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().build()?;
//!
//!     let response = client.tts().synthesize(&SynthesisRequest {
//!         text: "Bonjour, le monde.".to_string(),
//!         voice: "fr-FR-DeniseNeural".to_string(),
//!         rate: -10,
//!         ..Default::default()
//!     }).await?;
//!
//!     // response.audio contains the audio data
//!     println!("Audio length: {} bytes", response.audio.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! The service authenticates with a fixed trusted-client token, so no
//! credentials are required.

mod client;
mod error;
pub mod protocol;
mod tts;
mod types;
mod voices;

pub use client::{Client, ClientBuilder, DEFAULT_VOICES_URL, DEFAULT_WSS_URL, TRUSTED_CLIENT_TOKEN};
pub use error::{Error, Result};
pub use tts::{SynthesisRequest, SynthesisResponse, TtsChunk, TtsService};
pub use types::AudioFormat;
pub use voices::{Voice, VoiceTag, VoicesService};
