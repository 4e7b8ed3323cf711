//! Per-user context.
//!
//! Each user owns exactly one `UserContext` holding their profile,
//! onboarding progress, session state, and (while a simulation runs)
//! their conversation history. Contexts live in a process-owned registry
//! keyed by the transport's opaque user identifier, created on first
//! contact. There is no hidden shared mutable state: every operation
//! takes the context explicitly.

use crate::conversation::ConversationHistory;
use crate::session::{OnboardingState, SessionState};
use crate::user::UserProfile;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// All per-user state, exclusively owned by one user.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    /// Profile produced by onboarding
    pub profile: UserProfile,
    /// Progress of the one-time onboarding flow
    pub onboarding: OnboardingState,
    /// Idle / active-simulation state
    pub session: SessionState,
    /// Conversation history; absent when no simulation has started
    /// since the last reset
    history: Option<ConversationHistory>,
}

impl UserContext {
    /// Creates a fresh context for a first-contact user.
    pub fn new() -> Self {
        Self::default()
    }

    /// The history, if one exists.
    pub fn history(&self) -> Option<&ConversationHistory> {
        self.history.as_ref()
    }

    /// Mutable access to the history, creating an empty one lazily.
    pub fn history_mut(&mut self) -> &mut ConversationHistory {
        self.history.get_or_insert_with(ConversationHistory::new)
    }

    /// Replaces the history wholesale and returns a mutable reference
    /// to the new one. Used when a simulation starts.
    pub fn replace_history(&mut self, history: ConversationHistory) -> &mut ConversationHistory {
        self.history.insert(history)
    }

    /// Removes the history entirely, so a subsequent start begins fresh.
    pub fn discard_history(&mut self) {
        self.history = None;
    }
}

/// Process-owned map from user identifier to context.
///
/// Entries are created on first contact and live for the process
/// lifetime (no persistence across restarts). Each context sits behind
/// its own `Mutex`, which the dispatcher holds for the whole inbound
/// event: events for one user are strictly sequential, while different
/// users never contend with each other beyond the brief registry lookup.
#[derive(Default)]
pub struct ContextRegistry {
    contexts: RwLock<HashMap<String, Arc<Mutex<UserContext>>>>,
}

impl ContextRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context for `user_id`, creating it on first contact.
    pub async fn get_or_create(&self, user_id: &str) -> Arc<Mutex<UserContext>> {
        {
            let contexts = self.contexts.read().await;
            if let Some(ctx) = contexts.get(user_id) {
                return ctx.clone();
            }
        }

        let mut contexts = self.contexts.write().await;
        contexts
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(UserContext::new())))
            .clone()
    }

    /// Number of known users.
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    /// Whether any user has made contact yet.
    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_contact_creates_context() {
        let registry = ContextRegistry::new();
        assert!(registry.is_empty().await);

        let ctx = registry.get_or_create("user-1").await;
        assert_eq!(registry.len().await, 1);
        assert!(!ctx.lock().await.profile.is_onboarded());
    }

    #[tokio::test]
    async fn test_same_user_gets_same_context() {
        let registry = ContextRegistry::new();

        let a = registry.get_or_create("user-1").await;
        a.lock().await.profile.name = Some("Ana".to_string());

        let b = registry.get_or_create("user-1").await;
        assert_eq!(b.lock().await.profile.name.as_deref(), Some("Ana"));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let registry = ContextRegistry::new();

        let a = registry.get_or_create("user-1").await;
        a.lock().await.history_mut().push_user("only for user-1");

        let b = registry.get_or_create("user-2").await;
        assert!(b.lock().await.history().is_none());
    }
}
