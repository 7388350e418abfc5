//! Agent and HTTP error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Agent execution error.
///
/// Returned by `LlmClient::invoke` and `ChatAgent::reply`. The agent does not classify
/// failures further.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, empty completion).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

/// Error returned from HTTP handlers.
///
/// Rendered as a bare 500 with a plain-text `Internal Server Error` body. The detail goes to
/// the log only, never to the caller.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Agent(e) => tracing::error!(error = %e, "agent error"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
