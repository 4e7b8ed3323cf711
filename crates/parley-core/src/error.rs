//! Error types for the Parley application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Parley application.
///
/// The first four variants are policy rejections: their `Display` text is
/// the user-facing guidance the transport sends back verbatim, so the
/// wording here is part of the product surface, not just diagnostics.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParleyError {
    /// Persona name not present in the catalog
    #[error("Unknown persona: '{name}'. Use /personas to see who is available.")]
    UnknownPersona { name: String },

    /// An operation that requires a completed profile was attempted first
    #[error("Please use /start to set up your profile before starting a simulation.")]
    OnboardingRequired,

    /// A second simulation was requested while one is running
    #[error(
        "A simulation with '{persona}' is already active. Use /end to finish it before starting a new one."
    )]
    SimulationAlreadyActive { persona: String },

    /// Free text arrived while no simulation is running (informational)
    #[error("I'm not currently in a simulation. Use /create to start one!")]
    NoActiveSimulation,

    /// A prompt template referenced a placeholder the caller did not supply
    #[error("Prompt template references an unsupplied placeholder: '{{{placeholder}}}'")]
    MissingPlaceholder { placeholder: String },

    /// Completion API failure (network, quota, malformed response)
    #[error("Completion API failure: {0}")]
    Completion(String),

    /// Configuration error (missing credentials, bad environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParleyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownPersona error
    pub fn unknown_persona(name: impl Into<String>) -> Self {
        Self::UnknownPersona { name: name.into() }
    }

    /// Creates a SimulationAlreadyActive error
    pub fn simulation_already_active(persona: impl Into<String>) -> Self {
        Self::SimulationAlreadyActive {
            persona: persona.into(),
        }
    }

    /// Creates a MissingPlaceholder error
    pub fn missing_placeholder(placeholder: impl Into<String>) -> Self {
        Self::MissingPlaceholder {
            placeholder: placeholder.into(),
        }
    }

    /// Creates a Completion error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an UnknownPersona error
    pub fn is_unknown_persona(&self) -> bool {
        matches!(self, Self::UnknownPersona { .. })
    }

    /// Check if this is a policy rejection (surfaced verbatim to the user,
    /// as opposed to a fault in the system itself)
    pub fn is_policy_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnknownPersona { .. }
                | Self::OnboardingRequired
                | Self::SimulationAlreadyActive { .. }
                | Self::NoActiveSimulation
        )
    }

    /// Check if this is a Completion error
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion(_))
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for ParleyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {err}"))
    }
}

/// Conversion from anyhow::Error (transitional, for the binary boundary)
impl From<anyhow::Error> for ParleyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for ParleyError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, ParleyError>`.
pub type Result<T> = std::result::Result<T, ParleyError>;
