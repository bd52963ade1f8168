//! Batch speech generation from numbered sentence lists.
//!
//! Reads "N. sentence" lines from a text file, derives a deterministic
//! filesystem-safe filename for each sentence, and drives a
//! [`Synthesizer`] once per record, skipping targets that already exist
//! so reruns only fill the gaps.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parlons_batch::{generate, GenerateConfig, NamingConfig};
//!
//! # async fn run(synthesizer: &dyn parlons_batch::Synthesizer) -> parlons_batch::Result<()> {
//! let config = GenerateConfig {
//!     input_file: "sentences_numbered.txt".into(),
//!     output_dir: "public/audio".into(),
//!     voice: "fr-FR-DeniseNeural".to_string(),
//!     rate: -10,
//!     naming: NamingConfig::default(),
//! };
//!
//! let report = generate(&config, synthesizer).await?;
//! println!("{} written, {} skipped", report.written, report.skipped);
//! # Ok(())
//! # }
//! ```

mod error;
mod generate;
pub mod lines;
pub mod naming;

pub use error::{Error, Result};
pub use generate::{generate, GenerateConfig, GenerateReport, Synthesizer};
pub use lines::{parse_line, parse_lines, SentenceRecord};
pub use naming::{filename, sanitize_core, NamingConfig};
