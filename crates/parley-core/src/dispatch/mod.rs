//! Dispatch module.
//!
//! The transport-facing surface of the core: inbound event types and the
//! dispatcher that routes them to the per-user state machines and the
//! conversation service.
//!
//! # Module Structure
//!
//! - `event`: Inbound event kinds (`InboundEvent`, `Command`)
//! - `router`: The entry points of the core (`Dispatcher`)

mod event;
mod router;

// Re-export public API
pub use event::{Command, InboundEvent};
pub use router::Dispatcher;
