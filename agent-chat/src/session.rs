//! Chat session: single owner of the log and the draft.
//!
//! Send flow: [`ChatSession::send_message`] appends the "You" entry and spawns one task per
//! send. The task reports a [`Settled`] on the channel returned by [`ChatSession::new`];
//! the owner passes it to [`ChatSession::apply`], which appends the "Agent" entry and
//! empties the draft again. Nothing orders the tasks, so entries for concurrent sends land
//! in resolution order.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::draft::Draft;
use crate::error::TransportError;
use crate::log::ChatLog;
use crate::message::{render_reply, ChatMessage};
use crate::transport::{ChatReply, ChatTransport};

/// Identifies one send attempt. Tickets increase in send order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SendTicket(pub u64);

/// Result of one send task, delivered to the owner of the session.
#[derive(Debug)]
pub struct Settled {
    pub ticket: SendTicket,
    pub outcome: Result<ChatReply, TransportError>,
}

/// Receiving end for settlements of a session's sends.
pub type SettledReceiver = mpsc::UnboundedReceiver<Settled>;

/// Chat session state: append-only log, draft, and in-flight send bookkeeping.
pub struct ChatSession {
    transport: Arc<dyn ChatTransport>,
    log: ChatLog,
    draft: Draft,
    settled_tx: mpsc::UnboundedSender<Settled>,
    next_ticket: u64,
    in_flight: usize,
}

impl ChatSession {
    /// Creates a session over `transport` and the receiver its sends will settle on.
    pub fn new(transport: impl ChatTransport) -> (Self, SettledReceiver) {
        Self::with_transport(Arc::new(transport))
    }

    /// Same as [`new`](Self::new) for a transport the caller keeps a handle to.
    pub fn with_transport(transport: Arc<dyn ChatTransport>) -> (Self, SettledReceiver) {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let session = Self {
            transport,
            log: ChatLog::new(),
            draft: Draft::new(),
            settled_tx,
            next_ticket: 0,
            in_flight: 0,
        };
        (session, settled_rx)
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable draft for keystrokes.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Number of sends whose settlement has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sends the current draft.
    ///
    /// No-op returning `None` when the draft is empty or whitespace-only. Otherwise appends
    /// a "You" entry with the draft text, clears the draft, spawns the request and returns
    /// its ticket. Must be called inside a tokio runtime.
    pub fn send_message(&mut self) -> Option<SendTicket> {
        if self.draft.is_blank() {
            return None;
        }
        let text = self.draft.take();
        self.log.push(ChatMessage::you(text.clone()));

        let ticket = SendTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight += 1;
        tracing::debug!(ticket = ticket.0, in_flight = self.in_flight, "send");

        let transport = Arc::clone(&self.transport);
        let tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = transport.send(&text).await;
            // Receiver gone means the session was dropped; nothing left to update.
            let _ = tx.send(Settled { ticket, outcome });
        });
        Some(ticket)
    }

    /// Appends the "Agent" entry for a settled send, clears the draft and returns the entry.
    ///
    /// A reply renders through [`render_reply`]; any transport error becomes the fixed
    /// error entry. Text typed while the request was in flight is discarded.
    pub fn apply(&mut self, settled: Settled) -> &ChatMessage {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.draft.clear();
        let entry = match settled.outcome {
            Ok(reply) => ChatMessage::agent(render_reply(reply.reply.as_ref())),
            Err(e) => {
                tracing::warn!(ticket = settled.ticket.0, error = %e, "send failed");
                ChatMessage::error()
            }
        };
        self.log.push(entry)
    }

    /// Waits for every in-flight send on `settled` and applies each in arrival order.
    ///
    /// `on_entry` sees each appended Agent entry.
    pub async fn drain<F>(&mut self, settled: &mut SettledReceiver, mut on_entry: F)
    where
        F: FnMut(&ChatMessage),
    {
        while self.in_flight > 0 {
            match settled.recv().await {
                Some(s) => on_entry(self.apply(s)),
                None => break,
            }
        }
    }
}
