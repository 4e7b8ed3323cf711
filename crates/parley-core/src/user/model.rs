//! UserProfile domain model.
//!
//! Represents the per-user onboarding data: display name and stated
//! goal. Both are optional until onboarding completes; rendering falls
//! back to generic placeholders when unset.

use serde::{Deserialize, Serialize};

/// Fallback display name used before onboarding completes.
pub const DEFAULT_USER_NAME: &str = "a valued user";

/// Fallback goal used before onboarding completes.
pub const DEFAULT_USER_GOAL: &str = "to practice social skills";

/// User profile collected once during onboarding.
///
/// Not re-editable in the current scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User's display name, set during onboarding
    pub name: Option<String>,
    /// User's stated goal, set during onboarding
    pub goal: Option<String>,
}

impl UserProfile {
    /// Display name, falling back to a generic placeholder when unset.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_USER_NAME)
    }

    /// Stated goal, falling back to a generic placeholder when unset.
    pub fn stated_goal(&self) -> &str {
        self.goal.as_deref().unwrap_or(DEFAULT_USER_GOAL)
    }

    /// Whether onboarding has produced a name for this user.
    pub fn is_onboarded(&self) -> bool {
        self.name.is_some()
    }
}
