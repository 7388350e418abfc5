//! # agent-server
//!
//! HTTP entrypoint for the chat agent. The application object is [`app`]: an axum
//! [`Router`] with a single route, `POST /chat`, taking `{"message": string}` and answering
//! `{"reply": string}`. The `agent-server` binary binds it to [`BIND_ADDR`] with no flags.
//!
//! ## Main Modules
//!
//! - [`agent`]: `ChatAgent`, single-turn: system prompt + user message → LLM → reply.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, `ChatOpenAI` (OpenAI-compatible via async-openai).
//! - [`routes`]: `/chat` handler and request logging middleware.
//! - [`config`]: `ServerConfig` from env / `.env`.
//! - [`error`]: `AgentError`, `ServerError` (plain-text 500 responses).
//! - [`logging`]: tracing to stdout and optionally `LOG_FILE`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use agent_server::{app, AppState, ChatAgent, MockLlm, BIND_ADDR};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let agent = ChatAgent::new(Box::new(MockLlm::echo()));
//! let router = app(Arc::new(AppState::new(agent)));
//! let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod routes;

use std::sync::Arc;

use axum::{middleware, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

pub use agent::{ChatAgent, DEFAULT_SYSTEM_PROMPT};
pub use config::{Error, ServerConfig};
pub use error::{AgentError, ServerError};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, Message, MockLlm};
pub use routes::{ChatReply, ChatRequest};

/// Address the entrypoint binds: all interfaces, port 8000.
pub const BIND_ADDR: &str = "0.0.0.0:8000";

/// Shared state for all routes.
pub struct AppState {
    pub agent: ChatAgent,
}

impl AppState {
    pub fn new(agent: ChatAgent) -> Self {
        Self { agent }
    }
}

/// The application object: `POST /chat` with request tracing and permissive CORS.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(routes::chat))
        .layer(middleware::from_fn(routes::log_request_body))
        .layer(
            TraceLayer::new_for_http().make_span_with(
                |req: &axum::http::Request<axum::body::Body>| {
                    info_span!("request", method = %req.method(), uri = %req.uri())
                },
            ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
