//! LLM client abstraction for the chat agent.
//!
//! `ChatAgent` depends on a callable that turns a message list into assistant text; this
//! module defines the trait, the message type, a mock, and the OpenAI-compatible client.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;

/// One message in the prompt sent to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    System(String),
    User(String),
    Assistant(String),
}

impl Message {
    pub fn system(s: impl Into<String>) -> Self {
        Message::System(s.into())
    }

    pub fn user(s: impl Into<String>) -> Self {
        Message::User(s.into())
    }
}

/// Response from an LLM completion: assistant message text.
pub struct LlmResponse {
    pub content: String,
}

/// LLM client: given messages, returns assistant text.
///
/// Implementations: `MockLlm` (fixed response), `ChatOpenAI` (real API).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}
