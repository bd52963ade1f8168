//! One-shot synthesis command.

use clap::Args;
use serde::{Deserialize, Serialize};

use parlons_edgetts::{AudioFormat, Client, SynthesisRequest};

use super::{format_bytes, load_request, output_bytes, output_result, print_success, print_verbose};
use crate::Cli;

/// Synthesize a single utterance to an audio file.
#[derive(Args)]
pub struct SayCommand {
    /// Text to synthesize (alternative to -f file)
    #[arg(short = 't', long)]
    text: Option<String>,

    /// Voice short name (e.g., fr-FR-DeniseNeural)
    #[arg(short = 'V', long)]
    voice: Option<String>,

    /// Speaking-rate adjustment in percent
    #[arg(short = 'r', long)]
    rate: Option<i32>,

    /// Volume adjustment in percent
    #[arg(long)]
    volume: Option<i32>,

    /// Pitch adjustment in Hz
    #[arg(long)]
    pitch: Option<i32>,

    /// Audio format (mp3, wav, webm)
    #[arg(short = 'e', long)]
    format: Option<String>,
}

/// Synthesis request from a YAML/JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SayFileRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    voice: String,
    #[serde(default)]
    rate: i32,
    #[serde(default)]
    volume: i32,
    #[serde(default)]
    pitch: i32,
    #[serde(default)]
    format: Option<String>,
}

impl SayCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let output_path = cli
            .output
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("output file is required for audio, use -o flag"))?;

        let mut req = match cli.input.as_deref() {
            Some(path) => load_request::<SayFileRequest>(path)?,
            None => SayFileRequest::default(),
        };

        if let Some(t) = self.text.as_deref() {
            req.text = t.to_string();
        }
        if let Some(v) = self.voice.as_deref() {
            req.voice = v.to_string();
        }
        if let Some(r) = self.rate {
            req.rate = r;
        }
        if let Some(v) = self.volume {
            req.volume = v;
        }
        if let Some(p) = self.pitch {
            req.pitch = p;
        }
        if let Some(f) = self.format.as_deref() {
            req.format = Some(f.to_string());
        }

        if req.text.is_empty() {
            anyhow::bail!("text is required, use -t flag or -f file");
        }
        if req.voice.is_empty() {
            anyhow::bail!("voice is required, use -V flag or -f file");
        }

        let format = match req.format.as_deref() {
            Some(name) => AudioFormat::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("unsupported format '{}'", name))?,
            None => AudioFormat::default(),
        };

        print_verbose(cli, &format!("Voice: {} (rate {:+}%)", req.voice, req.rate));
        print_verbose(cli, &format!("Format: {}", format.as_str()));

        let client = Client::builder().build()?;
        let response = client
            .tts()
            .synthesize(&SynthesisRequest {
                text: req.text,
                voice: req.voice,
                rate: req.rate,
                volume: req.volume,
                pitch: req.pitch,
                format,
            })
            .await?;

        output_bytes(&response.audio, output_path)?;
        print_success(&format!(
            "Audio saved to: {} ({})",
            output_path,
            format_bytes(response.audio.len())
        ));

        let result = serde_json::json!({
            "audio_size": response.audio.len(),
            "request_id": response.request_id,
            "output_file": output_path,
        });
        output_result(&result, cli.json)
    }
}
