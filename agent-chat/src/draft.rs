//! In-progress input buffer.

/// Observable state of a [`Draft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Editing,
}

/// The text the user is composing. Mutated per keystroke, cleared by a send attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Replaces the whole draft (e.g. a line read from a terminal).
    pub fn set(&mut self, s: impl Into<String>) {
        self.text = s.into();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when there is nothing to send: empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn state(&self) -> DraftState {
        if self.text.is_empty() {
            DraftState::Empty
        } else {
            DraftState::Editing
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Takes the text out, leaving the draft empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystrokes_move_empty_to_editing() {
        let mut d = Draft::new();
        assert_eq!(d.state(), DraftState::Empty);
        d.push('h');
        d.push_str("i!");
        assert_eq!(d.state(), DraftState::Editing);
        d.backspace();
        assert_eq!(d.as_str(), "hi");
    }

    #[test]
    fn whitespace_only_is_blank_but_not_empty() {
        let mut d = Draft::new();
        d.set(" \t\n");
        assert!(d.is_blank());
        assert!(!d.is_empty());
        assert_eq!(d.state(), DraftState::Editing);
    }

    #[test]
    fn take_returns_text_and_clears() {
        let mut d = Draft::new();
        d.set("hello");
        assert_eq!(d.take(), "hello");
        assert_eq!(d.state(), DraftState::Empty);
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut d = Draft::new();
        d.backspace();
        assert!(d.is_empty());
    }
}
