//! Session state machine.
//!
//! Tracks whether a user currently has an active simulation. The
//! presence of an active persona is equivalent to "a simulation is
//! running"; its absence means idle.

use crate::error::{ParleyError, Result};
use serde::{Deserialize, Serialize};

/// Per-user session state: `Idle` or `Active(persona)`.
///
/// Transitions form a total function:
/// - `Idle --select--> Active` (requires onboarding to have completed)
/// - `Active --select--> rejected` (the running simulation must end first)
/// - `Active --end--> Idle`
/// - `Idle --end--> rejected` (informational, nothing to do)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionState {
    /// No simulation is running.
    #[default]
    Idle,
    /// A simulation with the named persona is running.
    Active {
        /// Name of the active persona.
        persona: String,
    },
}

impl SessionState {
    /// Attempts the `Idle -> Active(persona)` transition.
    ///
    /// # Arguments
    ///
    /// * `persona` - Name of the persona to activate
    /// * `onboarded` - Whether the user's profile name has been set
    ///
    /// # Errors
    ///
    /// - `ParleyError::OnboardingRequired` when onboarding has not
    ///   completed; no state change occurs
    /// - `ParleyError::SimulationAlreadyActive` when a simulation is
    ///   already running; the active persona never changes
    pub fn select(&mut self, persona: &str, onboarded: bool) -> Result<()> {
        match self {
            Self::Active { persona: active } => {
                Err(ParleyError::simulation_already_active(active.clone()))
            }
            Self::Idle if !onboarded => Err(ParleyError::OnboardingRequired),
            Self::Idle => {
                *self = Self::Active {
                    persona: persona.to_string(),
                };
                Ok(())
            }
        }
    }

    /// Attempts the `Active -> Idle` transition.
    ///
    /// # Returns
    ///
    /// The name of the persona whose simulation just ended.
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::NoActiveSimulation` when already idle.
    pub fn end(&mut self) -> Result<String> {
        match std::mem::take(self) {
            Self::Active { persona } => Ok(persona),
            Self::Idle => Err(ParleyError::NoActiveSimulation),
        }
    }

    /// Name of the active persona, if a simulation is running.
    pub fn active_persona(&self) -> Option<&str> {
        match self {
            Self::Active { persona } => Some(persona),
            Self::Idle => None,
        }
    }

    /// Whether a simulation is currently running.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_requires_onboarding() {
        let mut state = SessionState::Idle;
        let err = state.select("Interviewer", false).unwrap_err();
        assert_eq!(err, ParleyError::OnboardingRequired);
        assert_eq!(state, SessionState::Idle);
    }

    #[test]
    fn test_select_activates_persona() {
        let mut state = SessionState::Idle;
        state.select("Interviewer", true).unwrap();
        assert_eq!(state.active_persona(), Some("Interviewer"));
    }

    #[test]
    fn test_select_while_active_never_changes_persona() {
        let mut state = SessionState::Idle;
        state.select("Interviewer", true).unwrap();

        let err = state.select("Investor", true).unwrap_err();
        assert_eq!(
            err,
            ParleyError::simulation_already_active("Interviewer")
        );
        assert_eq!(state.active_persona(), Some("Interviewer"));
    }

    #[test]
    fn test_end_returns_persona_and_goes_idle() {
        let mut state = SessionState::Idle;
        state.select("Crush", true).unwrap();

        assert_eq!(state.end().unwrap(), "Crush");
        assert_eq!(state, SessionState::Idle);
    }

    #[test]
    fn test_end_while_idle_is_informational() {
        let mut state = SessionState::Idle;
        assert_eq!(state.end().unwrap_err(), ParleyError::NoActiveSimulation);
    }
}
