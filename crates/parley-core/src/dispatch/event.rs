//! Inbound event types.
//!
//! The transport delivers three kinds of events, each tagged with an
//! opaque user identifier: plain text, command invocations, and
//! button-selection callbacks.

/// A command the user can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin (or revisit) onboarding.
    Start,
    /// Open the persona selection menu.
    Create,
    /// End the active simulation.
    End,
    /// List all commands.
    Help,
    /// Describe the system.
    About,
    /// Show the user's current profile.
    Settings,
    /// List selectable personas.
    Personas,
    /// Shortcut straight into the Investor simulation.
    InvestorPitch,
}

impl Command {
    /// Parses a `/command` token, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "/start" => Some(Self::Start),
            "/create" => Some(Self::Create),
            "/end" => Some(Self::End),
            "/help" => Some(Self::Help),
            "/about" => Some(Self::About),
            "/settings" => Some(Self::Settings),
            "/personas" => Some(Self::Personas),
            "/investor_pitch" => Some(Self::InvestorPitch),
            _ => None,
        }
    }
}

/// One inbound transport event for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Plain text (onboarding answers or free talk).
    Text(String),
    /// A command invocation.
    Command(Command),
    /// A persona picked from the selection menu.
    Selection(String),
}
