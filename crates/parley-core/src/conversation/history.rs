//! Conversation history.
//!
//! The ordered message transcript exchanged with the completion API for
//! one user's active simulation. Append-only during normal operation;
//! the only removal is the rollback of a just-appended user message
//! after a failed completion call.

use super::message::{ConversationMessage, MessageRole};
use serde::{Deserialize, Serialize};

/// Ordered sequence of messages for one user's simulation.
///
/// Invariant: after a persona start, the first message has role `User`
/// and contains the rendered persona prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: Vec<ConversationMessage>,
}

impl ConversationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history seeded with a single user-role message
    /// (the rendered persona prompt).
    pub fn seeded_with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ConversationMessage::user(prompt)],
        }
    }

    /// Appends a user-role message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ConversationMessage::user(content));
    }

    /// Appends an assistant-role message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ConversationMessage::assistant(content));
    }

    /// Removes and returns the last message, if any.
    ///
    /// Used to roll back the just-appended user message after a failed
    /// completion call, so the history never ends on an unanswered user
    /// turn.
    pub fn pop_last(&mut self) -> Option<ConversationMessage> {
        self.messages.pop()
    }

    /// The messages, oldest first.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Role of the last message, if any.
    pub fn last_role(&self) -> Option<MessageRole> {
        self.messages.last().map(|m| m.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_history_starts_with_user_prompt() {
        let history = ConversationHistory::seeded_with_prompt("You are a test persona.");
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_role(), Some(MessageRole::User));
        assert_eq!(history.messages()[0].content, "You are a test persona.");
    }

    #[test]
    fn test_push_and_rollback() {
        let mut history = ConversationHistory::new();
        history.push_user("hello");
        history.push_assistant("hi there");
        assert_eq!(history.len(), 2);

        let popped = history.pop_last().unwrap();
        assert_eq!(popped.role, MessageRole::Assistant);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_role(), Some(MessageRole::User));
    }
}
