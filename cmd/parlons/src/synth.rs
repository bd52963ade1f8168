//! Synthesizer adapter over the Edge read-aloud client.

use async_trait::async_trait;
use parlons_batch::Synthesizer;
use parlons_edgetts::{AudioFormat, Client, SynthesisRequest};

/// [`Synthesizer`] backed by the Edge read-aloud service.
pub struct EdgeSynthesizer {
    client: Client,
    format: AudioFormat,
}

impl EdgeSynthesizer {
    /// Creates an adapter synthesizing in the given format.
    pub fn new(client: Client, format: AudioFormat) -> Self {
        Self { client, format }
    }
}

#[async_trait]
impl Synthesizer for EdgeSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str, rate: i32) -> parlons_batch::Result<Vec<u8>> {
        let response = self
            .client
            .tts()
            .synthesize(&SynthesisRequest {
                text: text.to_string(),
                voice: voice.to_string(),
                rate,
                format: self.format,
                ..Default::default()
            })
            .await
            .map_err(|e| parlons_batch::Error::Synthesis(e.to_string()))?;

        Ok(response.audio)
    }
}
