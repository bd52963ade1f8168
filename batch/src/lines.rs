//! Numbered sentence-list parsing.
//!
//! Input files carry one sentence per line in the shape `12. Comment ça
//! va?` — a sequence number, a period, the sentence. Anything else on a
//! non-blank line is reported and dropped; parsing never fails.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// One numbered sentence from an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    /// Leading sequence number of the line.
    pub number: u32,
    /// Sentence text as captured from the trimmed line.
    pub text: String,
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*(\d+)\.\s*(.+)$").expect("valid literal pattern"))
}

/// Parses one input line into a record.
///
/// Returns `None` for blank lines (silently) and for non-matching lines
/// (with a diagnostic). A digit run too large for the number type is
/// treated as non-matching.
pub fn parse_line(line: &str) -> Option<SentenceRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(caps) = line_pattern().captures(trimmed) else {
        warn!(line, "skipping unparseable line");
        return None;
    };

    let number = match caps[1].parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            warn!(line, "skipping line with out-of-range sequence number");
            return None;
        }
    };

    Some(SentenceRecord {
        number,
        text: caps[2].to_string(),
    })
}

/// Lazily parses the content of a sentence-list file.
pub fn parse_lines(content: &str) -> impl Iterator<Item = SentenceRecord> + '_ {
    content.lines().filter_map(parse_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let record = parse_line("7. Bonjour, le monde.").unwrap();
        assert_eq!(record.number, 7);
        assert_eq!(record.text, "Bonjour, le monde.");
    }

    #[test]
    fn test_parse_keeps_leading_number_padding_out_of_text() {
        let record = parse_line("007. Bonjour").unwrap();
        assert_eq!(record.number, 7);
        assert_eq!(record.text, "Bonjour");
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        // The line is trimmed before matching; the separator's own
        // whitespace is consumed by the pattern.
        let record = parse_line("  12.   Comment ça va?  ").unwrap();
        assert_eq!(record.number, 12);
        assert_eq!(record.text, "Comment ça va?");
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t ").is_none());
    }

    #[test]
    fn test_parse_invalid_lines() {
        assert!(parse_line("not a valid line").is_none());
        assert!(parse_line("12 Comment ça va?").is_none());
        assert!(parse_line("12.").is_none());
        assert!(parse_line(". text").is_none());
    }

    #[test]
    fn test_parse_out_of_range_number() {
        assert!(parse_line("99999999999999999999. trop grand").is_none());
    }

    #[test]
    fn test_parse_lines_continues_past_bad_lines() {
        let content = "1. Un.\n\nnot a valid line\n2. Deux.\n";
        let records: Vec<_> = parse_lines(content).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number, 1);
        assert_eq!(records[1].text, "Deux.");
    }
}
