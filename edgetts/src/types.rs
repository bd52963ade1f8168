//! Common types for the Edge read-aloud TTS client.

use serde::{Deserialize, Serialize};

/// Audio output format for synthesis.
///
/// The wire name is sent in the `speech.config` message; the service
/// returns audio frames in that encoding for the rest of the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    /// MP3, 24 kHz, 48 kbit/s mono. The read-aloud default.
    #[default]
    Mp3,
    /// MP3, 24 kHz, 96 kbit/s mono.
    Mp3HighBitrate,
    /// RIFF/WAV, 24 kHz, 16-bit mono PCM.
    RiffPcm,
    /// WebM Opus, 24 kHz mono.
    WebmOpus,
}

impl AudioFormat {
    /// Returns the wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio-24khz-48kbitrate-mono-mp3",
            AudioFormat::Mp3HighBitrate => "audio-24khz-96kbitrate-mono-mp3",
            AudioFormat::RiffPcm => "riff-24khz-16bit-mono-pcm",
            AudioFormat::WebmOpus => "webm-24khz-16bit-mono-opus",
        }
    }

    /// Returns the conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 | AudioFormat::Mp3HighBitrate => ".mp3",
            AudioFormat::RiffPcm => ".wav",
            AudioFormat::WebmOpus => ".webm",
        }
    }

    /// Parses a format from its conventional short name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mp3" => Some(AudioFormat::Mp3),
            "mp3-hq" => Some(AudioFormat::Mp3HighBitrate),
            "wav" | "pcm" => Some(AudioFormat::RiffPcm),
            "webm" | "opus" => Some(AudioFormat::WebmOpus),
            _ => None,
        }
    }
}
