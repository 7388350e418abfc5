//! HTTP transport over reqwest.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::TransportError;

use super::{ChatReply, ChatRequest, ChatTransport};

/// Posts `{"message": ...}` to `<base_url>/chat` and parses the body as JSON.
///
/// The response status is not inspected: any body that parses as JSON is a reply,
/// whatever the status. Connection failures, malformed URLs and non-JSON bodies are errors.
///
/// # Examples
///
/// ```no_run
/// use agent_chat::{ChatTransport, ClientConfig, HttpTransport};
///
/// # #[tokio::main]
/// # async fn main() {
/// let transport = HttpTransport::new(ClientConfig::new("http://localhost:8000"));
/// let reply = transport.send("hi").await.unwrap();
/// println!("{:?}", reply.reply);
/// # }
/// ```
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Creates a transport with a default client (no request timeout).
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a transport with a custom client (proxies, TLS roots).
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, TransportError> {
        let url = self.config.chat_url();
        let request = ChatRequest {
            message: message.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(url = %url, status = %status, len = bytes.len(), "chat response");
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(ChatReply::from_body(&body))
    }
}
