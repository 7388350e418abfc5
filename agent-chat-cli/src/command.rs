//! Input line classification: session commands vs. chat text.

/// What an input line asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `/exit` or `/quit` (case-insensitive): end the session now.
    Exit,
    /// Anything else is chat text for the draft.
    Message,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "/exit" | "/quit" => Command::Exit,
            _ => Command::Message,
        }
    }
}
