//! # agent-chat
//!
//! Chat client core for an agent service that answers `POST <base>/chat`.
//!
//! A [`ChatSession`] owns the append-only [`ChatLog`] and the in-progress [`Draft`].
//! Each [`ChatSession::send_message`] appends a "You" entry at once and spawns one task
//! that talks to the service through a [`ChatTransport`]. The task reports a [`Settled`]
//! over a channel; the owner of the session feeds it back with [`ChatSession::apply`],
//! which appends exactly one "Agent" entry (the reply, or [`ERROR_TEXT`]).
//!
//! Settlements arrive in the order requests resolve, not the order they were sent.
//!
//! ## Main Modules
//!
//! - [`message`]: `Sender`, `ChatMessage`, and how a raw `reply` value is rendered.
//! - [`log`]: `ChatLog`, the append-only display log.
//! - [`draft`]: `Draft`, the input buffer.
//! - [`session`]: `ChatSession`, `SendTicket`, `Settled`.
//! - [`transport`]: `ChatTransport`, `HttpTransport` (reqwest), `MockTransport`.
//! - [`config`]: `ClientConfig` (`NEXT_PUBLIC_API_URL`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agent_chat::{ChatSession, ClientConfig, HttpTransport};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = HttpTransport::new(ClientConfig::new("http://localhost:8000"));
//! let (mut session, mut settled) = ChatSession::new(transport);
//! session.draft_mut().set("hi");
//! session.send_message();
//! if let Some(s) = settled.recv().await {
//!     let entry = session.apply(s);
//!     println!("{}: {}", entry.sender, entry.text);
//! }
//! # }
//! ```

pub mod config;
pub mod draft;
pub mod error;
pub mod log;
pub mod message;
pub mod session;
pub mod transport;

pub use config::{ClientConfig, API_URL_ENV};
pub use draft::{Draft, DraftState};
pub use error::TransportError;
pub use log::ChatLog;
pub use message::{render_reply, ChatMessage, Sender, ERROR_TEXT};
pub use session::{ChatSession, SendTicket, Settled, SettledReceiver};
pub use transport::{ChatReply, ChatRequest, ChatTransport, HttpTransport, MockTransport};

#[cfg(test)]
mod tests;
