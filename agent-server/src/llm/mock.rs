//! Mock LLM for tests and keyless local runs.

use async_trait::async_trait;

use crate::error::AgentError;

use super::{LlmClient, LlmResponse, Message};

enum Behavior {
    Fixed(String),
    Echo,
    Fail(String),
}

/// Mock LLM: fixed reply, echo of the last user message, or a fixed failure.
///
/// **Interaction**: Implements `LlmClient`; used by route and end-to-end tests.
pub struct MockLlm {
    behavior: Behavior,
}

impl MockLlm {
    /// Always answers `content`.
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fixed(content.into()),
        }
    }

    /// Answers with the last user message.
    pub fn echo() -> Self {
        Self {
            behavior: Behavior::Echo,
        }
    }

    /// Always fails with `AgentError::ExecutionFailed(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(reason.into()),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let content = match &self.behavior {
            Behavior::Fixed(s) => s.clone(),
            Behavior::Echo => messages
                .iter()
                .rev()
                .find_map(|m| match m {
                    Message::User(s) => Some(s.clone()),
                    _ => None,
                })
                .unwrap_or_default(),
            Behavior::Fail(reason) => return Err(AgentError::ExecutionFailed(reason.clone())),
        };
        Ok(LlmResponse { content })
    }
}
