//! Transport error types.
//!
//! The session collapses every variant into the same fixed error entry; the variants only
//! exist so the cause can be logged.

use thiserror::Error;

/// Failure of one request to the agent service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request could not be built or sent, or the body could not be read
    /// (malformed URL, connection refused, reset).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response body was not JSON.
    #[error("response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// Request was rejected without a response (used by mocks).
    #[error("request rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of Rejected contains the reason.
    #[test]
    fn rejected_display_contains_reason() {
        let err = TransportError::Rejected("offline".to_string());
        let s = err.to_string();
        assert!(s.contains("rejected"), "Display should mention rejection: {}", s);
        assert!(s.contains("offline"), "Display should contain reason: {}", s);
    }

    /// **Scenario**: A serde_json error converts into Decode via `?`.
    #[test]
    fn json_error_converts_to_decode() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("<html>");
        let err: TransportError = parse.unwrap_err().into();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
