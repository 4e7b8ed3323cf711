//! Conversation service.
//!
//! Implements the "start persona" and "continue turn" operations on top
//! of a caller-supplied user context and the opaque completion client.
//! Completion API failures are absorbed here: they are logged and
//! converted to a fixed apology reply, and the history is left (or
//! rolled back to) a state that never ends on an unanswered user turn.

use super::client::CompletionClient;
use super::history::ConversationHistory;
use crate::context::UserContext;
use crate::error::{ParleyError, Result};
use crate::persona::PersonaCatalog;
use std::sync::Arc;
use tracing::error;

/// Fixed reply returned when the completion call fails while starting a
/// simulation. Not part of the roleplay transcript.
pub const START_FAILURE_REPLY: &str =
    "Sorry, I ran into an error starting the simulation. Please try again.";

/// Fixed reply returned when the completion call fails mid-conversation.
/// Not part of the roleplay transcript.
pub const TURN_FAILURE_REPLY: &str =
    "Sorry, I ran into an error processing your message. Please try again.";

/// Drives one user's conversation against the completion API.
///
/// Side effects are confined to the caller-supplied `UserContext`; the
/// catalog is read-only and shared process-wide.
pub struct ConversationService {
    catalog: Arc<PersonaCatalog>,
    client: Arc<dyn CompletionClient>,
}

impl ConversationService {
    /// Creates a new service over the shared catalog and completion client.
    pub fn new(catalog: Arc<PersonaCatalog>, client: Arc<dyn CompletionClient>) -> Self {
        Self { catalog, client }
    }

    /// Starts a simulation with the named persona.
    ///
    /// Resets the context's history to a single user-role message holding
    /// the rendered persona prompt, asks the completion API for the
    /// persona's opening line, appends it, and returns it.
    ///
    /// On API failure the history keeps the single prompt message (there
    /// is no prior valid state to return to) and the fixed start apology
    /// is returned instead of an error.
    ///
    /// # Errors
    ///
    /// - `ParleyError::UnknownPersona` if the persona is not in the catalog
    /// - `ParleyError::MissingPlaceholder` if the template references an
    ///   unsupplied field
    pub async fn start(
        &self,
        ctx: &mut UserContext,
        persona_name: &str,
        user_name: &str,
        user_goal: &str,
    ) -> Result<String> {
        let persona = self
            .catalog
            .lookup(persona_name)
            .ok_or_else(|| ParleyError::unknown_persona(persona_name))?;
        let prompt = self.catalog.render_prompt(persona, user_name, user_goal)?;

        let history = ctx.replace_history(ConversationHistory::seeded_with_prompt(prompt));

        let result = self.client.complete(history.messages()).await;
        match result {
            Ok(reply) => {
                history.push_assistant(&reply);
                Ok(reply)
            }
            Err(e) => {
                error!(persona = persona_name, error = %e, "completion call failed while starting simulation");
                Ok(START_FAILURE_REPLY.to_string())
            }
        }
    }

    /// Continues the active conversation with one user turn.
    ///
    /// Appends the user message, sends the full history to the completion
    /// API, appends the assistant reply, and returns it.
    ///
    /// On API failure the just-appended user message is rolled back so
    /// the history returns to its pre-call state, and the fixed turn
    /// apology is returned.
    pub async fn continue_turn(&self, ctx: &mut UserContext, user_text: &str) -> String {
        let history = ctx.history_mut();
        history.push_user(user_text);

        let result = self.client.complete(history.messages()).await;
        match result {
            Ok(reply) => {
                history.push_assistant(&reply);
                reply
            }
            Err(e) => {
                error!(error = %e, "completion call failed, rolling back user turn");
                history.pop_last();
                TURN_FAILURE_REPLY.to_string()
            }
        }
    }

    /// Discards the context's history entirely.
    ///
    /// The history's presence is removed (not merely cleared) so a
    /// subsequent `start` begins from zero length.
    pub fn reset(&self, ctx: &mut UserContext) {
        ctx.discard_history();
    }
}
