//! Edge read-aloud TTS client.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::Result,
    tts::TtsService,
    voices::VoicesService,
};

/// Default WebSocket synthesis endpoint.
pub const DEFAULT_WSS_URL: &str =
    "wss://speech.platform.bing.com/consumer/speech/synthesize/readaloud/edge/v1";

/// Default voice catalogue endpoint.
pub const DEFAULT_VOICES_URL: &str =
    "https://speech.platform.bing.com/consumer/speech/synthesize/readaloud/voices/list";

/// Fixed trusted-client token used by the Edge browser.
///
/// This is a documented public value, not a user credential.
pub const TRUSTED_CLIENT_TOKEN: &str = "6A5AA1D4EAFF4E9FB37E23D68491D6F4";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36 Edg/122.0.0.0";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Edge read-aloud TTS client.
///
/// # Example
///
/// ```rust,no_run
/// use parlons_edgetts::Client;
///
/// # fn main() -> parlons_edgetts::Result<()> {
/// let client = Client::builder().build()?;
///
/// // Use TTS service
/// // let response = client.tts().synthesize(&request).await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    config: Arc<ClientConfig>,
}

/// Client configuration.
pub(crate) struct ClientConfig {
    pub(crate) wss_url: String,
    pub(crate) voices_url: String,
    pub(crate) trusted_token: String,
    pub(crate) user_agent: String,
    pub(crate) http: reqwest::Client,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured WebSocket synthesis URL.
    pub fn wss_url(&self) -> &str {
        &self.config.wss_url
    }

    /// Returns the configured voice catalogue URL.
    pub fn voices_url(&self) -> &str {
        &self.config.voices_url
    }

    /// Returns the TTS (Text-to-Speech) service.
    pub fn tts(&self) -> TtsService {
        TtsService::new(self.config.clone())
    }

    /// Returns the voice catalogue service.
    pub fn voices(&self) -> VoicesService {
        VoicesService::new(self.config.clone())
    }
}

/// Builder for creating an Edge read-aloud TTS client.
pub struct ClientBuilder {
    wss_url: String,
    voices_url: String,
    trusted_token: String,
    user_agent: String,
    request_timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            wss_url: DEFAULT_WSS_URL.to_string(),
            voices_url: DEFAULT_VOICES_URL.to_string(),
            trusted_token: TRUSTED_CLIENT_TOKEN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Sets a custom WebSocket synthesis URL.
    pub fn wss_url(mut self, url: impl Into<String>) -> Self {
        self.wss_url = url.into();
        self
    }

    /// Sets a custom voice catalogue URL.
    pub fn voices_url(mut self, url: impl Into<String>) -> Self {
        self.voices_url = url.into();
        self
    }

    /// Sets a custom trusted-client token.
    pub fn trusted_token(mut self, token: impl Into<String>) -> Self {
        self.trusted_token = token.into();
        self
    }

    /// Sets a custom User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Sets the HTTP request timeout for catalogue calls.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.trusted_token.is_empty() {
            return Err(crate::Error::Config(
                "trusted token must be non-empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;

        Ok(Client {
            config: Arc::new(ClientConfig {
                wss_url: self.wss_url,
                voices_url: self.voices_url,
                trusted_token: self.trusted_token,
                user_agent: self.user_agent,
                http,
            }),
        })
    }
}

/// Generates a connection ID for one synthesis turn.
///
/// The service expects the UUID without dashes.
pub(crate) fn generate_connect_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
