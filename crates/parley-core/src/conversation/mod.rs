//! Conversation domain module.
//!
//! This module contains the message transcript types, the narrow
//! completion-client seam, and the conversation service that drives one
//! user's simulation.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageRole`, `ConversationMessage`)
//! - `history`: Per-user ordered transcript (`ConversationHistory`)
//! - `client`: Completion API seam (`CompletionClient`)
//! - `service`: Start / continue / reset operations (`ConversationService`)

mod client;
mod history;
mod message;
mod service;

// Re-export public API
pub use client::CompletionClient;
pub use history::ConversationHistory;
pub use message::{ConversationMessage, MessageRole};
pub use service::{ConversationService, START_FAILURE_REPLY, TURN_FAILURE_REPLY};
