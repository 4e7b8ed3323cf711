//! User domain module.
//!
//! This module contains the user profile model produced by onboarding.

mod model;

// Re-export public API
pub use model::{DEFAULT_USER_GOAL, DEFAULT_USER_NAME, UserProfile};
