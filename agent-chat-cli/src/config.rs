//! CLI options and how they resolve into a [`ClientConfig`].

use agent_chat::ClientConfig;

/// Error type used by the CLI entry points.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Overrides collected from the command line.
#[derive(Clone, Debug, Default)]
pub struct ChatOptions {
    /// Base URL of the agent service; wins over `NEXT_PUBLIC_API_URL` when set.
    pub api_url: Option<String>,
    /// Debug logging to stderr.
    pub verbose: bool,
}

impl ChatOptions {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "warn,agent_chat=debug,agent_chat_cli=debug"
        } else {
            "warn"
        }
    }

    /// Resolves the client config once: `--api-url`, else `NEXT_PUBLIC_API_URL`.
    pub fn client_config(&self) -> ClientConfig {
        match &self.api_url {
            Some(url) => ClientConfig::new(url.clone()),
            None => ClientConfig::from_env(),
        }
    }
}
