//! Append-only display log.

use crate::message::ChatMessage;

/// Ordered sequence of chat entries for one session.
///
/// There is no removal API: the length never decreases while the log is alive.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns a reference to it.
    pub fn push(&mut self, entry: ChatMessage) -> &ChatMessage {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
