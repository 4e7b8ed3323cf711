//! Onboarding flow.
//!
//! The one-time, two-step collection of a user's display name and stated
//! goal. The flow is strictly linear with no branching: each text input
//! fills the next profile field and moves the state forward.

use crate::user::UserProfile;
use serde::{Deserialize, Serialize};

/// State of the linear onboarding flow: `AwaitingName -> AwaitingGoal -> Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingState {
    /// Waiting for the user's display name.
    #[default]
    AwaitingName,
    /// Name captured, waiting for the user's stated goal.
    AwaitingGoal,
    /// Profile complete; onboarding never runs again for this user.
    Done,
}

impl OnboardingState {
    /// Consumes one text input, filling the next profile field.
    ///
    /// Total transition function: `Done` absorbs further input without
    /// changing the profile.
    pub fn advance(self, profile: &mut UserProfile, text: &str) -> Self {
        match self {
            Self::AwaitingName => {
                profile.name = Some(text.trim().to_string());
                Self::AwaitingGoal
            }
            Self::AwaitingGoal => {
                profile.goal = Some(text.trim().to_string());
                Self::Done
            }
            Self::Done => Self::Done,
        }
    }

    /// Whether onboarding has completed.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
