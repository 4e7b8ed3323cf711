//! Persona domain module.
//!
//! This module contains the persona domain models, the read-only
//! catalog, preset configurations, and prompt template rendering.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain models (`Persona`, `PersonaOption`)
//! - `catalog`: Insertion-ordered, read-only `PersonaCatalog`
//! - `preset`: Default system personas
//! - `template`: `{user_name}` / `{user_goal}` prompt rendering

mod catalog;
mod model;
mod preset;
pub mod template;

// Re-export public API
pub use catalog::PersonaCatalog;
pub use model::{Persona, PersonaOption};
pub use preset::default_personas;
