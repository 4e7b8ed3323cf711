//! Completion client trait.
//!
//! Defines the narrow seam between the conversation logic and the
//! chat-completion API.

use super::message::ConversationMessage;
use crate::error::Result;

/// An abstract client for the chat-completion API.
///
/// This trait is the single point of contact with the external
/// completion service: an ordered message list in, one assistant reply
/// out, fallible for any reason (network, quota, malformed input).
/// Model name and sampling temperature are implementation concerns.
///
/// Keeping the seam this narrow lets tests substitute a deterministic
/// fake, decoupling the state-machine logic from any live network
/// dependency.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the full message history and returns the assistant's reply text.
    ///
    /// # Arguments
    ///
    /// * `messages` - The ordered conversation history, oldest first
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::Completion` if the call fails for any reason.
    async fn complete(&self, messages: &[ConversationMessage]) -> Result<String>;
}
