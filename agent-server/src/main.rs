//! Service entrypoint: binds `agent_server::app` to 0.0.0.0:8000.
//!
//! Configure the model via env: OPENAI_API_KEY, OPENAI_API_BASE, OPENAI_MODEL,
//! OPENAI_TEMPERATURE, AGENT_SYSTEM_PROMPT. Load .env with dotenv. No flags.

use std::sync::Arc;

use agent_server::{app, logging, AppState, Error, ServerConfig, BIND_ADDR};
use tracing::info;

/// Load .env from current directory; if not found, try parent (workspace root when run from crate dir).
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(parent) = cwd.parent() {
            let env_path = parent.join(".env");
            if env_path.is_file() {
                let _ = dotenv::from_path(env_path);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    load_dotenv();
    logging::init_tracing()?;

    let config = ServerConfig::from_env()?;
    info!(
        model = %config.model,
        base_url = %config.api_base,
        temperature = config.temperature,
        "LLM config loaded"
    );

    let state = Arc::new(AppState::new(config.build_agent()));
    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!("listening on http://{}", BIND_ADDR);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
