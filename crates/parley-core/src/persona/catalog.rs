//! Persona catalog.
//!
//! Process-wide, read-only collection of personas, shared by all users.
//! Lookup is by display name; listing preserves insertion order so the
//! selection menu is stable and deterministic.

use super::model::{Persona, PersonaOption};
use super::preset::default_personas;
use super::template;
use crate::error::Result;

/// An insertion-ordered, read-only collection of personas.
///
/// Built once at startup and shared (behind `Arc`) by every user's
/// operations. No mutation happens at runtime.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    /// Creates a catalog from an explicit persona list, keeping order.
    pub fn new(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// Creates a catalog holding the default preset personas.
    pub fn with_defaults() -> Self {
        Self::new(default_personas())
    }

    /// Looks up a persona by its display name.
    pub fn lookup(&self, name: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.name == name)
    }

    /// Returns `(name, description)` options in catalog order, for the
    /// transport to render as a menu of selectable entries.
    pub fn list_all(&self) -> Vec<PersonaOption> {
        self.personas.iter().map(PersonaOption::from).collect()
    }

    /// Number of personas in the catalog.
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Renders a persona's prompt template with the user's name and goal.
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::MissingPlaceholder` if the template
    /// references a placeholder other than `user_name` / `user_goal`.
    pub fn render_prompt(
        &self,
        persona: &Persona,
        user_name: &str,
        user_goal: &str,
    ) -> Result<String> {
        template::render(&persona.prompt_template, user_name, user_goal)
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> PersonaCatalog {
        PersonaCatalog::new(vec![
            Persona {
                name: "Zed".to_string(),
                description: "Last alphabetically, first inserted.".to_string(),
                prompt_template: "You are Zed. User: {user_name}.".to_string(),
            },
            Persona {
                name: "Abe".to_string(),
                description: "First alphabetically, last inserted.".to_string(),
                prompt_template: "You are Abe. Goal: {user_goal}.".to_string(),
            },
        ])
    }

    #[test]
    fn test_lookup_finds_by_name() {
        let catalog = small_catalog();
        assert_eq!(catalog.lookup("Abe").unwrap().name, "Abe");
        assert!(catalog.lookup("Nobody").is_none());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let catalog = small_catalog();
        let options = catalog.list_all();
        assert_eq!(options[0].name, "Zed");
        assert_eq!(options[1].name, "Abe");
    }

    #[test]
    fn test_default_catalog_contains_interviewer() {
        let catalog = PersonaCatalog::with_defaults();
        assert!(catalog.lookup("Interviewer").is_some());
        assert_eq!(catalog.list_all()[0].name, "Interviewer");
    }

    #[test]
    fn test_render_prompt_substitutes_profile_fields() {
        let catalog = small_catalog();
        let persona = catalog.lookup("Zed").unwrap();
        let rendered = catalog.render_prompt(persona, "Ana", "unused").unwrap();
        assert_eq!(rendered, "You are Zed. User: Ana.");
    }
}
