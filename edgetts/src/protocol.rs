//! Wire protocol for the Edge read-aloud synthesis service.
//!
//! One WebSocket connection carries one synthesis turn:
//!
//! - Client sends a text frame with `Path:speech.config` selecting the
//!   output format, then a text frame with `Path:ssml` carrying the
//!   SSML document.
//! - Server answers with text frames (`Path:turn.start`, `Path:response`,
//!   `Path:audio.metadata`) and binary frames (`Path:audio`) until a
//!   final `Path:turn.end` text frame.
//!
//! Text frames are `Header:Value` lines joined by CRLF, a blank line,
//! then the body. Binary frames start with a 2-byte big-endian header
//! length, the header block, then the raw audio payload.

use crate::error::{Error, Result};

/// `Path` header of the output-format configuration frame.
pub const PATH_SPEECH_CONFIG: &str = "speech.config";
/// `Path` header of the SSML request frame.
pub const PATH_SSML: &str = "ssml";
/// `Path` header marking the start of a synthesis turn.
pub const PATH_TURN_START: &str = "turn.start";
/// `Path` header of binary audio frames.
pub const PATH_AUDIO: &str = "audio";
/// `Path` header of word-boundary metadata frames.
pub const PATH_AUDIO_METADATA: &str = "audio.metadata";
/// `Path` header marking the end of a synthesis turn.
pub const PATH_TURN_END: &str = "turn.end";

const HEADER_SEPARATOR: &str = "\r\n\r\n";

/// Returns the `X-Timestamp` header value for outgoing frames.
///
/// The service expects the JavaScript `Date.toString()` rendering.
pub fn x_timestamp() -> String {
    chrono::Utc::now()
        .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
        .to_string()
}

/// Builds the `speech.config` frame selecting the audio output format.
pub fn speech_config_message(output_format: &str) -> String {
    let body = serde_json::json!({
        "context": {
            "synthesis": {
                "audio": {
                    "metadataoptions": {
                        "sentenceBoundaryEnabled": "false",
                        "wordBoundaryEnabled": "true",
                    },
                    "outputFormat": output_format,
                }
            }
        }
    });

    format!(
        "X-Timestamp:{}\r\nContent-Type:application/json; charset=utf-8\r\nPath:{}\r\n\r\n{}",
        x_timestamp(),
        PATH_SPEECH_CONFIG,
        body
    )
}

/// Builds the `ssml` frame carrying the synthesis request.
pub fn ssml_message(request_id: &str, ssml: &str) -> String {
    format!(
        "X-RequestId:{}\r\nContent-Type:application/ssml+xml\r\nX-Timestamp:{}\r\nPath:{}\r\n\r\n{}",
        request_id,
        x_timestamp(),
        PATH_SSML,
        ssml
    )
}

/// Builds the SSML document for one utterance.
///
/// Rate and volume are signed percentages, pitch a signed Hz offset.
pub fn build_ssml(text: &str, voice: &str, rate: i32, volume: i32, pitch: i32) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='en-US'>\
         <voice name='{}'><prosody pitch='{:+}Hz' rate='{:+}%' volume='{:+}%'>{}</prosody>\
         </voice></speak>",
        escape_xml(voice),
        pitch,
        rate,
        volume,
        escape_xml(text)
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// A parsed server text frame.
#[derive(Debug, Clone)]
pub struct TextFrame {
    /// Value of the `Path` header.
    pub path: String,
    /// All headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Frame body (may be empty).
    pub body: String,
}

impl TextFrame {
    /// Parses a text frame into headers and body.
    pub fn parse(data: &str) -> Result<TextFrame> {
        let (header_block, body) = data
            .split_once(HEADER_SEPARATOR)
            .ok_or_else(|| Error::Protocol("text frame without header separator".to_string()))?;

        let headers = parse_headers(header_block)?;
        let path = header_value(&headers, "Path")
            .ok_or_else(|| Error::Protocol("text frame without Path header".to_string()))?
            .to_string();

        Ok(TextFrame {
            path,
            headers,
            body: body.to_string(),
        })
    }

    /// Returns the value of a header, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

/// A parsed server binary frame.
#[derive(Debug, Clone)]
pub struct BinaryFrame {
    /// Value of the `Path` header.
    pub path: String,
    /// All headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Raw payload after the header block.
    pub payload: Vec<u8>,
}

impl BinaryFrame {
    /// Parses a binary frame: 2-byte big-endian header length, header
    /// block, payload.
    pub fn parse(data: &[u8]) -> Result<BinaryFrame> {
        if data.len() < 2 {
            return Err(Error::Protocol("binary frame shorter than 2 bytes".to_string()));
        }

        let header_len = u16::from_be_bytes([data[0], data[1]]) as usize;
        if data.len() < 2 + header_len {
            return Err(Error::Protocol(format!(
                "binary frame header length {} exceeds frame size {}",
                header_len,
                data.len()
            )));
        }

        let header_block = std::str::from_utf8(&data[2..2 + header_len])
            .map_err(|_| Error::Protocol("binary frame header is not UTF-8".to_string()))?;
        let headers = parse_headers(header_block)?;
        let path = header_value(&headers, "Path")
            .ok_or_else(|| Error::Protocol("binary frame without Path header".to_string()))?
            .to_string();

        Ok(BinaryFrame {
            path,
            headers,
            payload: data[2 + header_len..].to_vec(),
        })
    }
}

fn parse_headers(block: &str) -> Result<Vec<(String, String)>> {
    let mut headers = Vec::new();
    for line in block.split("\r\n") {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| Error::Protocol(format!("malformed header line: {line:?}")))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }
    Ok(headers)
}

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_config_contains_format() {
        let msg = speech_config_message("audio-24khz-48kbitrate-mono-mp3");
        assert!(msg.contains("Path:speech.config"));
        assert!(msg.contains("\"outputFormat\":\"audio-24khz-48kbitrate-mono-mp3\""));
        // The body must be valid JSON.
        let (_, body) = msg.split_once("\r\n\r\n").unwrap();
        serde_json::from_str::<serde_json::Value>(body).unwrap();
    }

    #[test]
    fn test_ssml_message_headers() {
        let msg = ssml_message("abc123", "<speak/>");
        assert!(msg.starts_with("X-RequestId:abc123\r\n"));
        assert!(msg.contains("Content-Type:application/ssml+xml"));
        assert!(msg.ends_with("\r\n\r\n<speak/>"));
    }

    #[test]
    fn test_build_ssml_prosody() {
        let ssml = build_ssml("Bonjour", "fr-FR-DeniseNeural", -10, 0, 0);
        assert!(ssml.contains("<voice name='fr-FR-DeniseNeural'>"));
        assert!(ssml.contains("rate='-10%'"));
        assert!(ssml.contains("pitch='+0Hz'"));
        assert!(ssml.contains("volume='+0%'"));
        assert!(ssml.contains(">Bonjour</prosody>"));
    }

    #[test]
    fn test_build_ssml_escapes_text() {
        let ssml = build_ssml("1 < 2 & \"yes\"", "en-US-AriaNeural", 0, 0, 0);
        assert!(ssml.contains("1 &lt; 2 &amp; &quot;yes&quot;"));
        assert!(!ssml.contains("1 < 2"));
    }

    #[test]
    fn test_text_frame_parse() {
        let frame = TextFrame::parse(
            "X-RequestId:42\r\nContent-Type:application/json\r\nPath:turn.start\r\n\r\n{\"x\":1}",
        )
        .unwrap();
        assert_eq!(frame.path, "turn.start");
        assert_eq!(frame.header("X-RequestId"), Some("42"));
        assert_eq!(frame.body, "{\"x\":1}");
    }

    #[test]
    fn test_text_frame_missing_separator() {
        assert!(TextFrame::parse("Path:turn.start").is_err());
    }

    #[test]
    fn test_binary_frame_parse() {
        let header = b"X-RequestId:42\r\nContent-Type:audio/mpeg\r\nPath:audio\r\n";
        let mut data = Vec::new();
        data.extend_from_slice(&(header.len() as u16).to_be_bytes());
        data.extend_from_slice(header);
        data.extend_from_slice(&[0xff, 0xf3, 0x01, 0x02]);

        let frame = BinaryFrame::parse(&data).unwrap();
        assert_eq!(frame.path, "audio");
        assert_eq!(frame.payload, vec![0xff, 0xf3, 0x01, 0x02]);
    }

    #[test]
    fn test_binary_frame_truncated() {
        // Header length claims 100 bytes but the frame is shorter.
        let mut data = vec![0x00, 0x64];
        data.extend_from_slice(b"Path:audio");
        assert!(BinaryFrame::parse(&data).is_err());
    }

    #[test]
    fn test_binary_frame_empty_payload() {
        let header = b"Path:audio\r\n";
        let mut data = Vec::new();
        data.extend_from_slice(&(header.len() as u16).to_be_bytes());
        data.extend_from_slice(header);

        let frame = BinaryFrame::parse(&data).unwrap();
        assert!(frame.payload.is_empty());
    }
}
