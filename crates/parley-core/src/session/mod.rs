//! Session domain module.
//!
//! This module contains the per-user state machines: the session state
//! (idle vs. active simulation) and the linear onboarding flow.
//!
//! # Module Structure
//!
//! - `state`: Session state machine (`SessionState`)
//! - `onboarding`: One-time profile collection (`OnboardingState`)

mod onboarding;
mod state;

// Re-export public API
pub use onboarding::OnboardingState;
pub use state::SessionState;
