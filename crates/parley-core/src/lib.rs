//! Parley core domain.
//!
//! Persona role-play practice: a user onboards once (name + goal), picks
//! a persona from a fixed catalog, and holds a simulated conversation
//! driven by an external chat-completion API.
//!
//! # Module Structure
//!
//! - `persona`: Read-only persona catalog, presets, prompt templates
//! - `conversation`: Message transcript, completion-client seam, service
//! - `session`: Session and onboarding state machines
//! - `user`: User profile produced by onboarding
//! - `context`: Per-user context and the process-owned registry
//! - `dispatch`: Transport-facing entry points
//! - `error`: Shared error type
//!
//! The completion API and the messaging transport are external
//! collaborators: the former enters through the [`conversation::CompletionClient`]
//! trait, the latter through [`dispatch::Dispatcher`].

pub mod context;
pub mod conversation;
pub mod dispatch;
pub mod error;
pub mod persona;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{ParleyError, Result};
