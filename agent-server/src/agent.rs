//! Chat agent: one system prompt, one user message, one LLM call.

use crate::error::AgentError;
use crate::llm::{LlmClient, Message};

/// Default system prompt when `AGENT_SYSTEM_PROMPT` is not set.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Answer the user's message clearly and concisely.";

/// Answers each message independently; no history is carried between calls.
pub struct ChatAgent {
    llm: Box<dyn LlmClient>,
    system_prompt: String,
}

impl ChatAgent {
    pub fn new(llm: Box<dyn LlmClient>) -> Self {
        Self::with_system_prompt(llm, DEFAULT_SYSTEM_PROMPT)
    }

    pub fn with_system_prompt(llm: Box<dyn LlmClient>, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Runs one turn for `message` and returns the assistant text.
    pub async fn reply(&self, message: &str) -> Result<String, AgentError> {
        let messages = [
            Message::system(self.system_prompt.as_str()),
            Message::user(message),
        ];
        let response = self.llm.invoke(&messages).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;

    #[tokio::test]
    async fn reply_returns_llm_content() {
        let agent = ChatAgent::new(Box::new(MockLlm::with_reply("hello")));
        assert_eq!(agent.reply("hi").await.unwrap(), "hello");
    }

    /// **Scenario**: The user message reaches the LLM after the system prompt.
    #[tokio::test]
    async fn reply_sends_user_message_to_llm() {
        let agent = ChatAgent::with_system_prompt(Box::new(MockLlm::echo()), "be brief");
        assert_eq!(agent.system_prompt(), "be brief");
        assert_eq!(agent.reply("ping").await.unwrap(), "ping");
    }

    #[tokio::test]
    async fn reply_propagates_llm_failure() {
        let agent = ChatAgent::new(Box::new(MockLlm::failing("quota")));
        let err = agent.reply("hi").await.unwrap_err();
        assert!(err.to_string().contains("quota"));
    }
}
