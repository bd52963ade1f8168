//! Sequential batch generation of audio files.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::Result,
    lines::parse_line,
    naming::{filename, NamingConfig},
};

/// Speech synthesis backend driven by [`generate`].
///
/// The driver issues one call per sentence and never overlaps calls.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesizes the text into audio bytes.
    ///
    /// `rate` is a signed speaking-rate percentage (-10 for "-10%").
    async fn synthesize(&self, text: &str, voice: &str, rate: i32) -> Result<Vec<u8>>;
}

/// Configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Numbered sentence list to read.
    pub input_file: PathBuf,
    /// Directory audio files are placed in and checked against.
    pub output_dir: PathBuf,
    /// Voice passed to the synthesizer.
    pub voice: String,
    /// Speaking-rate adjustment passed to the synthesizer.
    #[serde(default)]
    pub rate: i32,
    /// Filename derivation settings.
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Counters for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Files synthesized and written.
    pub written: usize,
    /// Records whose target file already existed.
    pub skipped: usize,
    /// Non-blank lines that did not parse.
    pub invalid: usize,
}

/// Generates one audio file per parsed record, skipping existing targets.
///
/// Strictly sequential: the next record is processed only after the
/// current write (or skip) completes, so at most one synthesis call is
/// in flight. Unparseable lines are reported and dropped; synthesis and
/// IO errors propagate and halt the run. The presence of a target file
/// is the only resume state, so a rerun over the same input and output
/// directory synthesizes nothing that is already on disk.
pub async fn generate(
    config: &GenerateConfig,
    synthesizer: &dyn Synthesizer,
) -> Result<GenerateReport> {
    tokio::fs::create_dir_all(&config.output_dir).await?;
    let content = tokio::fs::read_to_string(&config.input_file).await?;

    let mut report = GenerateReport::default();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(record) = parse_line(line) else {
            report.invalid += 1;
            continue;
        };

        let name = filename(record.number, &record.text, &config.naming);
        let path = config.output_dir.join(&name);

        if path.exists() {
            info!(number = record.number, file = %name, "already exists, skipping");
            report.skipped += 1;
            continue;
        }

        info!(number = record.number, file = %name, "synthesizing");
        let audio = synthesizer
            .synthesize(&record.text, &config.voice, config.rate)
            .await?;
        tokio::fs::write(&path, &audio).await?;
        report.written += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Error;

    /// Records every synthesis call and returns fixed bytes.
    struct StubSynthesizer {
        calls: Mutex<Vec<String>>,
    }

    impl StubSynthesizer {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Synthesizer for StubSynthesizer {
        async fn synthesize(&self, text: &str, _voice: &str, _rate: i32) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(text.to_string());
            Ok(b"audio".to_vec())
        }
    }

    /// Always fails, for error-propagation tests.
    struct FailingSynthesizer;

    #[async_trait]
    impl Synthesizer for FailingSynthesizer {
        async fn synthesize(&self, _text: &str, _voice: &str, _rate: i32) -> Result<Vec<u8>> {
            Err(Error::Synthesis("boom".to_string()))
        }
    }

    fn test_config(dir: &std::path::Path) -> GenerateConfig {
        GenerateConfig {
            input_file: dir.join("sentences.txt"),
            output_dir: dir.join("audio"),
            voice: "fr-FR-DeniseNeural".to_string(),
            rate: -10,
            naming: NamingConfig {
                zero_pad: Some(3),
                extension: ".mp3".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_generate_writes_one_file_per_record() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("sentences.txt"),
            "1. Bonjour, le monde.\n2. Comment ça va?\n",
        )
        .unwrap();

        let config = test_config(dir.path());
        let stub = StubSynthesizer::new();
        let report = generate(&config, &stub).await.unwrap();

        assert_eq!(report.written, 2);
        assert_eq!(report.skipped, 0);
        assert!(config.output_dir.join("001_Bonjour_le_monde..mp3").exists());
        assert!(config.output_dir.join("002_Comment_ça_va.mp3").exists());
        // The synthesizer sees the sentence as captured, not the
        // sanitized core.
        assert_eq!(
            stub.calls(),
            vec!["Bonjour, le monde.", "Comment ça va?"]
        );
    }

    #[tokio::test]
    async fn test_generate_skips_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sentences.txt"), "1. Bonjour.\n2. Salut.\n").unwrap();

        let config = test_config(dir.path());
        std::fs::create_dir_all(&config.output_dir).unwrap();
        std::fs::write(config.output_dir.join("001_Bonjour..mp3"), b"old").unwrap();

        let stub = StubSynthesizer::new();
        let report = generate(&config, &stub).await.unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 1);
        // The existing file is untouched and no synthesis happened for it.
        assert_eq!(
            std::fs::read(config.output_dir.join("001_Bonjour..mp3")).unwrap(),
            b"old"
        );
        assert_eq!(stub.calls(), vec!["Salut."]);
    }

    #[tokio::test]
    async fn test_generate_rerun_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sentences.txt"), "1. Un.\n2. Deux.\n").unwrap();

        let config = test_config(dir.path());
        let stub = StubSynthesizer::new();
        let first = generate(&config, &stub).await.unwrap();
        let second = generate(&config, &stub).await.unwrap();

        assert_eq!(first.written, 2);
        assert_eq!(second.written, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(stub.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_counts_invalid_lines_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("sentences.txt"),
            "\nnot a valid line\n3. Trois.\n",
        )
        .unwrap();

        let config = test_config(dir.path());
        let stub = StubSynthesizer::new();
        let report = generate(&config, &stub).await.unwrap();

        assert_eq!(report.invalid, 1);
        assert_eq!(report.written, 1);
        assert_eq!(stub.calls(), vec!["Trois."]);
    }

    #[tokio::test]
    async fn test_generate_duplicate_numbers_second_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sentences.txt"), "1. Pareil.\n1. Pareil.\n").unwrap();

        let config = test_config(dir.path());
        let stub = StubSynthesizer::new();
        let report = generate(&config, &stub).await.unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 1);
    }

    #[tokio::test]
    async fn test_generate_synthesis_error_halts_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sentences.txt"), "1. Un.\n2. Deux.\n").unwrap();

        let config = test_config(dir.path());
        let result = generate(&config, &FailingSynthesizer).await;

        assert!(matches!(result, Err(Error::Synthesis(_))));
        // Nothing was written for the failed record.
        assert!(!config.output_dir.join("001_Un..mp3").exists());
    }

    #[tokio::test]
    async fn test_generate_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sentences.txt"), "1. Un.\n").unwrap();

        let config = GenerateConfig {
            output_dir: dir.path().join("nested/deeper/audio"),
            ..test_config(dir.path())
        };
        let stub = StubSynthesizer::new();
        generate(&config, &stub).await.unwrap();

        assert!(config.output_dir.join("001_Un..mp3").exists());
    }

    #[tokio::test]
    async fn test_generate_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let result = generate(&config, &StubSynthesizer::new()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
