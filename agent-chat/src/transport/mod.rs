//! Network seam between the session and the agent service.
//!
//! [`ChatSession`](crate::ChatSession) depends on a [`ChatTransport`] that turns one message
//! into one [`ChatReply`]. Implementations: [`HttpTransport`] (reqwest, real service) and
//! [`MockTransport`] (fixed reply or rejection, no network).

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportError;

/// Request body for `POST <base>/chat`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// What the session needs from a response body: the raw `reply` field, if any.
///
/// Other fields are ignored. The value is not validated; see
/// [`render_reply`](crate::render_reply).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatReply {
    pub reply: Option<Value>,
}

impl ChatReply {
    /// Reply carrying a plain string.
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            reply: Some(Value::String(s.into())),
        }
    }

    /// Extracts `reply` from any JSON body. Non-object bodies have no `reply`.
    pub fn from_body(body: &Value) -> Self {
        Self {
            reply: body.get("reply").cloned(),
        }
    }
}

/// Sends one chat message and resolves with the parsed reply or a transport failure.
///
/// Called from a spawned task per send, so implementations must be shareable across tasks.
/// No retry and no timeout are expected of implementations.
#[async_trait]
pub trait ChatTransport: Send + Sync + 'static {
    async fn send(&self, message: &str) -> Result<ChatReply, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_serializes_as_message_object() {
        let body = serde_json::to_value(ChatRequest {
            message: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"message": "hi"}));
    }

    /// **Scenario**: Extra fields are ignored; only `reply` is kept.
    #[test]
    fn from_body_keeps_reply_only() {
        let r = ChatReply::from_body(&json!({"reply": "hello", "usage": {"tokens": 3}}));
        assert_eq!(r, ChatReply::text("hello"));
    }

    /// **Scenario**: Bodies without `reply` (error objects, arrays, scalars) yield no reply.
    #[test]
    fn from_body_without_reply_is_none() {
        assert_eq!(ChatReply::from_body(&json!({"error": "x"})).reply, None);
        assert_eq!(ChatReply::from_body(&json!([1, 2])).reply, None);
        assert_eq!(ChatReply::from_body(&json!("reply")).reply, None);
    }
}
