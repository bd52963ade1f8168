//! TTS (Text-to-Speech) service for the Edge read-aloud API.

use std::sync::Arc;

use async_stream::try_stream;
use futures::{SinkExt, Stream, StreamExt};
use http::header::{HeaderValue, USER_AGENT};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{client::IntoClientRequest, Message},
    MaybeTlsStream, WebSocketStream,
};
use tracing::debug;

use crate::{
    client::{generate_connect_id, ClientConfig},
    error::{Error, Result},
    protocol::{self, BinaryFrame, TextFrame},
    types::AudioFormat,
};

/// TTS service provides speech synthesis over the read-aloud WebSocket.
pub struct TtsService {
    config: Arc<ClientConfig>,
}

/// Synthesis request for one utterance.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Text to synthesize.
    pub text: String,
    /// Voice short name (e.g., "fr-FR-DeniseNeural").
    pub voice: String,
    /// Speaking-rate adjustment as a signed percentage (-10 for "-10%").
    pub rate: i32,
    /// Volume adjustment as a signed percentage.
    pub volume: i32,
    /// Pitch adjustment as a signed Hz offset.
    pub pitch: i32,
    /// Audio output format.
    pub format: AudioFormat,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice: "en-US-AriaNeural".to_string(),
            rate: 0,
            volume: 0,
            pitch: 0,
            format: AudioFormat::default(),
        }
    }
}

/// Synthesis response for one utterance.
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// Audio data (binary, in the requested format).
    pub audio: Vec<u8>,
    /// Request ID of the synthesis turn.
    pub request_id: String,
}

/// Streaming synthesis chunk.
#[derive(Debug, Clone)]
pub struct TtsChunk {
    /// Audio data (binary). Empty on the final chunk.
    pub audio: Vec<u8>,
    /// Whether this is the last chunk of the turn.
    pub is_last: bool,
}

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

impl TtsService {
    /// Creates a new TTS service.
    pub(crate) fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    /// Synthesizes one utterance, collecting the whole audio turn.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use parlons_edgetts::{Client, SynthesisRequest};
    ///
    /// # async fn run() -> parlons_edgetts::Result<()> {
    /// let client = Client::builder().build()?;
    /// let response = client.tts().synthesize(&SynthesisRequest {
    ///     text: "Comment ça va?".to_string(),
    ///     voice: "fr-FR-DeniseNeural".to_string(),
    ///     ..Default::default()
    /// }).await?;
    /// // response.audio contains the audio data
    /// # Ok(())
    /// # }
    /// ```
    pub async fn synthesize(&self, req: &SynthesisRequest) -> Result<SynthesisResponse> {
        let request_id = generate_connect_id();
        let mut ws = self.open_turn(&request_id, req).await?;

        let mut audio = Vec::new();
        let mut finished = false;

        while let Some(msg) = ws.next().await {
            match msg? {
                Message::Text(text) => {
                    let frame = TextFrame::parse(&text)?;
                    debug!(path = %frame.path, "server frame");
                    if frame.path == protocol::PATH_TURN_END {
                        finished = true;
                        break;
                    }
                }
                Message::Binary(data) => {
                    let frame = BinaryFrame::parse(&data)?;
                    if frame.path == protocol::PATH_AUDIO {
                        audio.extend_from_slice(&frame.payload);
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }

        // The turn is over either way; close politely if still open.
        let _ = ws.close(None).await;

        if !finished {
            return Err(Error::Protocol(
                "connection closed before turn.end".to_string(),
            ));
        }
        if audio.is_empty() {
            return Err(Error::NoAudio(request_id));
        }

        Ok(SynthesisResponse { audio, request_id })
    }

    /// Synthesizes one utterance as an async stream of audio chunks.
    ///
    /// The final chunk has `is_last` set and carries no audio.
    pub async fn synthesize_stream(
        &self,
        req: &SynthesisRequest,
    ) -> Result<impl Stream<Item = Result<TtsChunk>>> {
        let request_id = generate_connect_id();
        let mut ws = self.open_turn(&request_id, req).await?;

        Ok(try_stream! {
            while let Some(msg) = ws.next().await {
                match msg? {
                    Message::Text(text) => {
                        let frame = TextFrame::parse(&text)?;
                        if frame.path == protocol::PATH_TURN_END {
                            let _ = ws.close(None).await;
                            yield TtsChunk { audio: Vec::new(), is_last: true };
                            return;
                        }
                    }
                    Message::Binary(data) => {
                        let frame = BinaryFrame::parse(&data)?;
                        if frame.path == protocol::PATH_AUDIO && !frame.payload.is_empty() {
                            yield TtsChunk { audio: frame.payload, is_last: false };
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }

            Err(Error::Protocol("connection closed before turn.end".to_string()))?;
        })
    }

    /// Opens a WebSocket connection and sends the configuration and SSML
    /// frames for one synthesis turn.
    async fn open_turn(&self, request_id: &str, req: &SynthesisRequest) -> Result<WsStream> {
        if req.text.is_empty() {
            return Err(Error::Config("text must be non-empty".to_string()));
        }
        if req.voice.is_empty() {
            return Err(Error::Config("voice must be non-empty".to_string()));
        }

        let url = format!(
            "{}?TrustedClientToken={}&ConnectionId={}",
            self.config.wss_url, self.config.trusted_token, request_id
        );
        debug!(url = %self.config.wss_url, request_id, "connecting");

        let mut request = url.into_client_request()?;
        let headers = request.headers_mut();
        headers.insert("Pragma", HeaderValue::from_static("no-cache"));
        headers.insert("Cache-Control", HeaderValue::from_static("no-cache"));
        headers.insert(
            "Origin",
            HeaderValue::from_static("chrome-extension://jdiccldimpdaibmpdkjnbmckianbfold"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|_| Error::Config("user agent is not a valid header value".to_string()))?,
        );

        let (mut ws, _response) = connect_async(request).await?;

        ws.send(Message::Text(
            protocol::speech_config_message(req.format.as_str()).into(),
        ))
        .await?;

        let ssml = protocol::build_ssml(&req.text, &req.voice, req.rate, req.volume, req.pitch);
        ws.send(Message::Text(protocol::ssml_message(request_id, &ssml).into()))
            .await?;

        Ok(ws)
    }
}
