//! Chat entries and reply rendering.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text of the Agent entry appended when a send fails for any reason.
pub const ERROR_TEXT: &str = "⚠️ Error contacting API.";

/// Who an entry in the log is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    You,
    Agent,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::You => "You",
            Sender::Agent => "Agent",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One displayed entry: sender and text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn you(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::You,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            text: text.into(),
        }
    }

    /// The fixed Agent entry for a failed send.
    pub fn error() -> Self {
        Self::agent(ERROR_TEXT)
    }
}

/// Renders the `reply` field of a response body as display text, without validating it.
///
/// A JSON string yields its contents, an absent or `null` field yields the empty string,
/// and any other value yields its compact JSON text.
pub fn render_reply(reply: Option<&Value>) -> String {
    match reply {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sender_displays_as_you_and_agent() {
        assert_eq!(Sender::You.to_string(), "You");
        assert_eq!(Sender::Agent.to_string(), "Agent");
    }

    /// **Scenario**: String replies are used verbatim, including surrounding whitespace.
    #[test]
    fn render_reply_string_is_verbatim() {
        let v = json!("  hello\n");
        assert_eq!(render_reply(Some(&v)), "  hello\n");
    }

    /// **Scenario**: Absent and null replies render as empty text.
    #[test]
    fn render_reply_absent_or_null_is_empty() {
        assert_eq!(render_reply(None), "");
        assert_eq!(render_reply(Some(&Value::Null)), "");
    }

    /// **Scenario**: Non-string replies are not rejected; they render as JSON text.
    #[test]
    fn render_reply_other_values_render_as_json() {
        assert_eq!(render_reply(Some(&json!(42))), "42");
        assert_eq!(render_reply(Some(&json!({"a": true}))), r#"{"a":true}"#);
    }

    #[test]
    fn error_entry_uses_fixed_text() {
        let m = ChatMessage::error();
        assert_eq!(m.sender, Sender::Agent);
        assert_eq!(m.text, "⚠️ Error contacting API.");
    }
}
