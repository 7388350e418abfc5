use std::io::{self, Write};

use agent_chat::ChatMessage;

/// Writes one log entry as `<Sender>: <text>` and flushes.
pub fn write_entry<W: Write + ?Sized>(out: &mut W, entry: &ChatMessage) -> io::Result<()> {
    writeln!(out, "{}: {}", entry.sender, entry.text)?;
    out.flush()
}
