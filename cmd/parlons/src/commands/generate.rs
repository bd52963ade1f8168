//! Batch generation command.

use clap::Args;
use serde::{Deserialize, Serialize};

use parlons_batch::{generate, GenerateConfig, NamingConfig};
use parlons_edgetts::{AudioFormat, Client};

use super::{load_request, output_result, print_success, print_verbose};
use crate::synth::EdgeSynthesizer;
use crate::Cli;

/// Generate audio files from a numbered sentence list.
///
/// Each "N. sentence" line becomes one audio file named after the
/// sentence content. Files already present in the output directory are
/// skipped, so an interrupted run can simply be restarted.
#[derive(Args)]
pub struct GenerateCommand {
    /// Sentence list to read (one "N. sentence" per line)
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Directory to place and check audio files in
    #[arg(short = 'd', long = "output-dir")]
    output_dir: Option<String>,

    /// Voice short name (e.g., fr-FR-DeniseNeural)
    #[arg(short = 'V', long)]
    voice: Option<String>,

    /// Speaking-rate adjustment in percent (e.g., -10)
    #[arg(short = 'r', long)]
    rate: Option<i32>,

    /// Zero-pad sequence numbers to this width
    #[arg(long)]
    zero_pad: Option<usize>,

    /// Do not zero-pad sequence numbers
    #[arg(long, conflicts_with = "zero_pad")]
    no_zero_pad: bool,

    /// Output file extension, dot included (.mp3, .wav, .webm)
    #[arg(short = 'e', long)]
    extension: Option<String>,
}

/// Generation job from a YAML/JSON file.
///
/// `zero_pad` distinguishes an absent key (default 3-digit padding)
/// from an explicit `zero_pad: null` (unpadded numbers).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerateFileRequest {
    #[serde(default)]
    input: String,
    #[serde(default)]
    output_dir: String,
    #[serde(default)]
    voice: String,
    #[serde(default)]
    rate: i32,
    #[serde(default = "default_zero_pad")]
    zero_pad: Option<usize>,
    #[serde(default = "default_extension")]
    extension: String,
}

impl Default for GenerateFileRequest {
    fn default() -> Self {
        Self {
            input: String::new(),
            output_dir: String::new(),
            voice: String::new(),
            rate: 0,
            zero_pad: default_zero_pad(),
            extension: default_extension(),
        }
    }
}

fn default_zero_pad() -> Option<usize> {
    NamingConfig::default().zero_pad
}

fn default_extension() -> String {
    NamingConfig::default().extension
}

impl GenerateCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        // Build the job from a request file, then let flags override.
        let mut req = match cli.input.as_deref() {
            Some(path) => load_request::<GenerateFileRequest>(path)?,
            None => GenerateFileRequest::default(),
        };

        if let Some(i) = self.input.as_deref() {
            req.input = i.to_string();
        }
        if let Some(d) = self.output_dir.as_deref() {
            req.output_dir = d.to_string();
        }
        if let Some(v) = self.voice.as_deref() {
            req.voice = v.to_string();
        }
        if let Some(r) = self.rate {
            req.rate = r;
        }
        if self.no_zero_pad {
            req.zero_pad = None;
        } else if let Some(w) = self.zero_pad {
            req.zero_pad = Some(w);
        }
        if let Some(e) = self.extension.as_deref() {
            req.extension = e.to_string();
        }

        if req.input.is_empty() {
            anyhow::bail!("sentence list is required, use -i flag or -f file");
        }
        if req.output_dir.is_empty() {
            anyhow::bail!("output directory is required, use -d flag or -f file");
        }
        if req.voice.is_empty() {
            anyhow::bail!("voice is required, use -V flag or -f file");
        }

        let format = format_for_extension(&req.extension)?;

        let config = GenerateConfig {
            input_file: req.input.into(),
            output_dir: req.output_dir.into(),
            voice: req.voice,
            rate: req.rate,
            naming: NamingConfig {
                zero_pad: req.zero_pad,
                extension: req.extension,
            },
        };

        print_verbose(cli, &format!("Input: {}", config.input_file.display()));
        print_verbose(cli, &format!("Output dir: {}", config.output_dir.display()));
        print_verbose(
            cli,
            &format!("Voice: {} (rate {:+}%)", config.voice, config.rate),
        );

        let client = Client::builder().build()?;
        let synthesizer = EdgeSynthesizer::new(client, format);

        let report = generate(&config, &synthesizer).await?;

        print_success(&format!(
            "{} written, {} skipped, {} invalid lines",
            report.written, report.skipped, report.invalid
        ));

        let result = serde_json::json!({
            "written": report.written,
            "skipped": report.skipped,
            "invalid": report.invalid,
            "output_dir": config.output_dir,
        });
        output_result(&result, cli.json)
    }
}

/// Maps a configured filename extension onto the synthesis format.
fn format_for_extension(extension: &str) -> anyhow::Result<AudioFormat> {
    AudioFormat::from_name(extension.trim_start_matches('.'))
        .ok_or_else(|| anyhow::anyhow!("unsupported extension '{}'", extension))
}
