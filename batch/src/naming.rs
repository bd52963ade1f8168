//! Filename derivation from numbered sentences.
//!
//! The filename is a pure function of (number, sentence, configuration),
//! which is what makes skip-if-exists reruns sound: the same sentence
//! always resolves to the same target path.

use serde::{Deserialize, Serialize};

/// Filename derivation settings.
///
/// One algorithm, parameterized: the mp3 list uses zero-padded 3-digit
/// numbers, the wav list unpadded numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Zero-pad sequence numbers to this width, when set.
    pub zero_pad: Option<usize>,
    /// Extension appended to every name, dot included.
    pub extension: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            zero_pad: Some(3),
            extension: ".mp3".to_string(),
        }
    }
}

/// Derives the target filename for one sentence.
pub fn filename(number: u32, sentence: &str, config: &NamingConfig) -> String {
    let core = sanitize_core(sentence);
    let prefix = match config.zero_pad {
        Some(width) => format!("{number:0width$}"),
        None => number.to_string(),
    };
    format!("{prefix}_{core}{}", config.extension)
}

/// Reduces a sentence to its filesystem-safe core string.
///
/// Order matters: the sentence is trimmed, a single trailing period is
/// remembered and removed, every `.` and `?` is dropped, `,` `:` `;`
/// and spaces become underscores, underscore runs collapse to one,
/// edge underscores are stripped, and only then is the remembered
/// period appended back. The core may therefore end in a period even
/// though interior periods are gone.
pub fn sanitize_core(sentence: &str) -> String {
    let trimmed = sentence.trim();
    let (core, had_trailing_period) = match trimmed.strip_suffix('.') {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };

    let mut out = String::with_capacity(core.len());
    for ch in core.chars() {
        match ch {
            '.' | '?' => {}
            ',' | ':' | ';' | ' ' | '_' => {
                // Collapse runs and drop leading separators in one go.
                if !out.is_empty() && !out.ends_with('_') {
                    out.push('_');
                }
            }
            c => out.push(c),
        }
    }
    if out.ends_with('_') {
        out.pop();
    }

    if had_trailing_period {
        out.push('.');
    }
    out
}
