//! Mock transport for tests and offline demos.
//!
//! Returns a fixed reply or a fixed rejection; records every message it was asked to send.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TransportError;

use super::{ChatReply, ChatTransport};

enum Behavior {
    Reply(ChatReply),
    Echo,
    Reject(String),
}

/// Mock transport: same outcome for every call.
///
/// **Interaction**: Implements `ChatTransport`; used by session and CLI tests in place of
/// `HttpTransport`.
pub struct MockTransport {
    behavior: Behavior,
    sent: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Every send resolves with `{"reply": text}`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(ChatReply::text(text))
    }

    /// Every send resolves with the given reply (e.g. one without a `reply` field).
    pub fn with_reply(reply: ChatReply) -> Self {
        Self {
            behavior: Behavior::Reply(reply),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every send resolves with the message it was given.
    pub fn echo() -> Self {
        Self {
            behavior: Behavior::Echo,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every send fails as a transport error.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Reject(reason.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Messages passed to `send`, in call order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, TransportError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.to_string());
        }
        match &self.behavior {
            Behavior::Reply(r) => Ok(r.clone()),
            Behavior::Echo => Ok(ChatReply::text(message)),
            Behavior::Reject(reason) => Err(TransportError::Rejected(reason.clone())),
        }
    }
}
