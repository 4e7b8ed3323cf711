//! Persona domain model.
//!
//! Represents the fixed AI characters a user can role-play against.
//! Each persona pairs a short description (shown in selection menus)
//! with a prompt template that seeds the conversation.

use serde::{Deserialize, Serialize};

/// A persona representing a fixed AI character with a templated prompt.
///
/// Personas are immutable and loaded at startup. The prompt template may
/// reference the `{user_name}` and `{user_goal}` placeholders, which are
/// substituted when a simulation starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name, unique within the catalog
    pub name: String,
    /// Short description shown in the selection menu
    pub description: String,
    /// Prompt template with `{user_name}` / `{user_goal}` placeholders
    pub prompt_template: String,
}

/// A (name, description) pair for presenting personas as selectable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaOption {
    /// Persona display name (selection key)
    pub name: String,
    /// Short description for the menu entry
    pub description: String,
}

impl From<&Persona> for PersonaOption {
    fn from(persona: &Persona) -> Self {
        Self {
            name: persona.name.clone(),
            description: persona.description.clone(),
        }
    }
}
