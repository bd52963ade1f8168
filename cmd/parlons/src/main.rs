//! Parlons CLI - batch text-to-speech for numbered sentence lists.

use clap::{Parser, Subcommand};

mod commands;
mod synth;

use commands::{GenerateCommand, SayCommand, VoicesCommand};

/// Parlons CLI - batch text-to-speech for numbered sentence lists.
///
/// This tool reads text files with one "N. sentence" per line and turns
/// each sentence into an audio file named after its content, using the
/// Edge read-aloud synthesis service:
///   - generate: batch conversion with skip-if-exists resume
///   - say: one-shot synthesis of a single utterance
///   - voices: voice catalogue listing
#[derive(Parser)]
#[command(name = "parlons")]
#[command(about = "Batch text-to-speech for numbered sentence lists")]
#[command(version)]
pub struct Cli {
    /// Output file (for audio-producing commands)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Input request file (YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output results as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate audio files from a numbered sentence list
    Generate(GenerateCommand),
    /// Synthesize a single utterance to a file
    Say(SayCommand),
    /// List voices from the catalogue
    Voices(VoicesCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Generate(cmd) => cmd.run(&cli).await,
        Commands::Say(cmd) => cmd.run(&cli).await,
        Commands::Voices(cmd) => cmd.run(&cli).await,
    }
}
