//! `/chat` handler and request logging middleware.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::AppState;

/// Max request body size to buffer for logging (bytes). Requests larger than this return 413.
const LOG_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

/// Middleware that logs method, URI and body size at debug, then forwards the request.
pub async fn log_request_body(request: Request<Body>, next: Next) -> Result<Response, Response> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, LOG_BODY_LIMIT)
        .await
        .map_err(|e| (StatusCode::PAYLOAD_TOO_LARGE, e.to_string()).into_response())?;
    tracing::debug!(method = %parts.method, uri = %parts.uri, len = bytes.len(), "request");
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// `POST /chat`: runs the agent on `message` and returns `{"reply": ...}`.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ServerError> {
    let reply = state.agent.reply(&req.message).await?;
    tracing::debug!(reply_len = reply.len(), "agent replied");
    Ok(Json(ChatReply { reply }))
}
