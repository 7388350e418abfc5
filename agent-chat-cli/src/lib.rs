//! agent-chat-cli library: terminal front end for the agent-chat session.
//!
//! Reads lines as drafts, sends each one, and prints every log entry as `<Sender>: <text>`.
//! Interactive mode multiplexes input and settlements so reading never waits on a request;
//! one-shot mode sends a single message and waits for its reply.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let transport = agent_chat::HttpTransport::new(agent_chat::ClientConfig::from_env());
//! let log = agent_chat_cli::run_once(transport, "hi", &mut std::io::stdout()).await?;
//! ```

mod command;
mod config;
mod logging;
mod render;
mod repl;

pub use command::Command;
pub use config::{ChatOptions, Error};
pub use logging::init_tracing;
pub use render::write_entry;
pub use repl::{run_interactive, run_once};

#[cfg(test)]
mod tests;
