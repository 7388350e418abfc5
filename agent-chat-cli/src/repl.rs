//! Interactive and one-shot chat loops.
//!
//! Both drive a [`ChatSession`]: each line becomes the draft, `send_message` appends the
//! "You" entry, and settlements from the session's channel append "Agent" entries.

use std::io::Write;

use agent_chat::{ChatLog, ChatSession, ChatTransport, SettledReceiver};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::Command;
use crate::config::Error;
use crate::render::write_entry;

/// Runs the interactive loop until `/exit`, `/quit` or end of input.
///
/// Input and settlements are selected together, so a new line can be sent while earlier
/// requests are in flight; replies print as they arrive. On `/exit` or `/quit` requests
/// still in flight are abandoned. At end of input the loop waits for them and prints each
/// reply before returning. Returns the final log.
pub async fn run_interactive<R, W>(
    mut session: ChatSession,
    mut settled: SettledReceiver,
    input: R,
    out: &mut W,
) -> Result<ChatLog, Error>
where
    R: AsyncBufRead + Unpin,
    W: Write + ?Sized,
{
    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!(in_flight = session.in_flight(), "end of input");
                    let mut written = Ok(());
                    session
                        .drain(&mut settled, |entry| {
                            if written.is_ok() {
                                written = write_entry(out, entry);
                            }
                        })
                        .await;
                    written?;
                    break;
                };
                match Command::parse(&line) {
                    Command::Exit => {
                        tracing::debug!(abandoned = session.in_flight(), "exit requested");
                        break;
                    }
                    Command::Message => {
                        session.draft_mut().set(line);
                        if session.send_message().is_some() {
                            if let Some(entry) = session.log().last() {
                                write_entry(out, entry)?;
                            }
                        }
                    }
                }
            }
            Some(s) = settled.recv() => {
                let entry = session.apply(s);
                write_entry(out, entry)?;
            }
        }
    }
    Ok(session.log().clone())
}

/// Sends one message, waits for it to settle and prints the whole log.
///
/// A blank message sends nothing and prints nothing. Returns the final log.
pub async fn run_once<T, W>(transport: T, message: &str, out: &mut W) -> Result<ChatLog, Error>
where
    T: ChatTransport,
    W: Write + ?Sized,
{
    let (mut session, mut settled) = ChatSession::new(transport);
    session.draft_mut().set(message);
    if session.send_message().is_some() {
        session.drain(&mut settled, |_| {}).await;
    }
    for entry in session.log() {
        write_entry(out, entry)?;
    }
    Ok(session.log().clone())
}
