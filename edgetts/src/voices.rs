//! Voice catalogue service for the Edge read-aloud API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{client::ClientConfig, error::Result};

/// Voice catalogue service.
pub struct VoicesService {
    config: Arc<ClientConfig>,
}

/// One entry of the voice catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voice {
    /// Full service name of the voice.
    pub name: String,
    /// Short name (e.g., "fr-FR-DeniseNeural"), accepted in SSML.
    pub short_name: String,
    /// Voice gender as reported by the service.
    pub gender: String,
    /// BCP-47 locale (e.g., "fr-FR").
    pub locale: String,
    /// Codec the service suggests for this voice.
    #[serde(default)]
    pub suggested_codec: String,
    /// Human-readable description.
    #[serde(default)]
    pub friendly_name: String,
    /// Rollout status (e.g., "GA").
    #[serde(default)]
    pub status: String,
    /// Category and personality tags.
    #[serde(default)]
    pub voice_tag: VoiceTag,
}

/// Category and personality tags of a voice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceTag {
    #[serde(default)]
    pub content_categories: Vec<String>,
    #[serde(default)]
    pub voice_personalities: Vec<String>,
}

impl VoicesService {
    /// Creates a new voice catalogue service.
    pub(crate) fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    /// Lists every voice the service offers.
    pub async fn list(&self) -> Result<Vec<Voice>> {
        let url = format!(
            "{}?trustedclienttoken={}",
            self.config.voices_url, self.config.trusted_token
        );

        let voices = self
            .config
            .http
            .get(&url)
            .header(http::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Voice>>()
            .await?;

        Ok(voices)
    }

    /// Lists voices whose locale starts with the given prefix
    /// (case-insensitive), e.g. "fr" or "fr-FR".
    pub async fn find(&self, locale: &str) -> Result<Vec<Voice>> {
        let needle = locale.to_ascii_lowercase();
        let voices = self
            .list()
            .await?
            .into_iter()
            .filter(|v| v.locale.to_ascii_lowercase().starts_with(&needle))
            .collect();
        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_deserialization() {
        let json = r#"{
            "Name": "Microsoft Server Speech Text to Speech Voice (fr-FR, DeniseNeural)",
            "ShortName": "fr-FR-DeniseNeural",
            "Gender": "Female",
            "Locale": "fr-FR",
            "SuggestedCodec": "audio-24khz-48kbitrate-mono-mp3",
            "FriendlyName": "Microsoft Denise Online (Natural) - French (France)",
            "Status": "GA",
            "VoiceTag": {
                "ContentCategories": ["General"],
                "VoicePersonalities": ["Friendly", "Positive"]
            }
        }"#;

        let voice: Voice = serde_json::from_str(json).unwrap();
        assert_eq!(voice.short_name, "fr-FR-DeniseNeural");
        assert_eq!(voice.locale, "fr-FR");
        assert_eq!(voice.voice_tag.content_categories, vec!["General"]);
    }

    #[test]
    fn test_voice_deserialization_minimal() {
        // Catalogue entries without optional fields still parse.
        let json = r#"{
            "Name": "x",
            "ShortName": "en-US-AriaNeural",
            "Gender": "Female",
            "Locale": "en-US"
        }"#;

        let voice: Voice = serde_json::from_str(json).unwrap();
        assert!(voice.friendly_name.is_empty());
        assert!(voice.voice_tag.content_categories.is_empty());
    }
}
