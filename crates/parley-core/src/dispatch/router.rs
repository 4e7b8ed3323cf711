//! Event dispatcher.
//!
//! Routes inbound transport events to the per-user state machines and
//! the conversation service. Each entry point returns the text to send
//! back; policy rejections come back as typed errors whose `Display` is
//! the user-facing guidance.
//!
//! The per-user context mutex is held for the whole entry point, so
//! events for one user are processed strictly sequentially while
//! different users stay independent.

use super::event::{Command, InboundEvent};
use crate::context::{ContextRegistry, UserContext};
use crate::conversation::{CompletionClient, ConversationService};
use crate::error::{ParleyError, Result};
use crate::persona::{PersonaCatalog, PersonaOption};
use crate::session::OnboardingState;
use std::sync::Arc;
use tracing::info;

const WELCOME_REPLY: &str = "Welcome to Parley! I'm here to help you practice your social skills. \
     Before we begin, what is your name?";

const GOAL_SET_REPLY: &str = "Goal set! You are all set up. \
     Use /create to select a persona and start practicing, or /help to see all commands.";

const FALLBACK_REPLY: &str =
    "I didn't quite catch that. Please provide a simple text response.";

const HELP_REPLY: &str = "Parley commands:\n\
     /start - Begin the onboarding process (if you haven't already).\n\
     /create - Select a persona to start a new conversation simulation.\n\
     /end - End the current simulation and clear the conversation history.\n\
     /personas - List the available personas.\n\
     /about - Learn more about what this is.\n\
     /settings - View your current profile (name, goal).\n\
     /investor_pitch - Shortcut straight into the Investor simulation.";

const ABOUT_REPLY: &str = "Parley is a social practice system: pick a persona \
     (an interviewer, an investor, an angry customer...) and role-play the \
     conversation against an AI character that stays in role and remembers \
     the exchange. Useful for interviews, pitches, difficult conversations, \
     and general soft-skills training.";

/// Routes inbound events for all users.
///
/// Owns the context registry; shares the read-only persona catalog with
/// the conversation service.
pub struct Dispatcher {
    registry: ContextRegistry,
    catalog: Arc<PersonaCatalog>,
    service: ConversationService,
}

impl Dispatcher {
    /// Creates a dispatcher over the given catalog and completion client.
    pub fn new(catalog: Arc<PersonaCatalog>, client: Arc<dyn CompletionClient>) -> Self {
        let service = ConversationService::new(catalog.clone(), client);
        Self {
            registry: ContextRegistry::new(),
            catalog,
            service,
        }
    }

    /// Handles a `/start` invocation: greets a new user and opens
    /// onboarding, or welcomes a returning one.
    pub async fn on_start_requested(&self, user_id: &str) -> Result<String> {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let ctx = ctx_arc.lock().await;

        if ctx.profile.is_onboarded() {
            return Ok(format!(
                "Welcome back, {}! Use /create to start a new simulation or /help for commands.",
                ctx.profile.display_name()
            ));
        }
        Ok(WELCOME_REPLY.to_string())
    }

    /// Handles a text answer while onboarding is in progress.
    ///
    /// Drives the linear `AwaitingName -> AwaitingGoal -> Done` flow; a
    /// completed user gets pointed at `/create` instead.
    pub async fn on_onboarding_text(&self, user_id: &str, text: &str) -> Result<String> {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let mut guard = ctx_arc.lock().await;
        let ctx = &mut *guard;

        if text.trim().is_empty() {
            return Ok(FALLBACK_REPLY.to_string());
        }

        match ctx.onboarding {
            OnboardingState::AwaitingName => {
                ctx.onboarding = ctx.onboarding.advance(&mut ctx.profile, text);
                Ok(format!(
                    "Nice to meet you, {}! What is one main goal you hope to achieve here?",
                    ctx.profile.display_name()
                ))
            }
            OnboardingState::AwaitingGoal => {
                ctx.onboarding = ctx.onboarding.advance(&mut ctx.profile, text);
                info!(user_id, "onboarding completed");
                Ok(GOAL_SET_REPLY.to_string())
            }
            OnboardingState::Done => Ok(format!(
                "You're already set up, {}. Use /create to start a simulation.",
                ctx.profile.display_name()
            )),
        }
    }

    /// Handles a persona selection.
    ///
    /// # Errors
    ///
    /// - `ParleyError::UnknownPersona` for a name not in the catalog
    /// - `ParleyError::OnboardingRequired` before onboarding completes
    ///   (no history is created)
    /// - `ParleyError::SimulationAlreadyActive` while a simulation runs
    ///   (the active persona never changes)
    pub async fn on_persona_selected(&self, user_id: &str, persona_name: &str) -> Result<String> {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let mut guard = ctx_arc.lock().await;
        let ctx = &mut *guard;

        if self.catalog.lookup(persona_name).is_none() {
            return Err(ParleyError::unknown_persona(persona_name));
        }

        let onboarded = ctx.profile.is_onboarded();
        ctx.session.select(persona_name, onboarded)?;

        let user_name = ctx.profile.display_name().to_string();
        let user_goal = ctx.profile.stated_goal().to_string();

        info!(user_id, persona = persona_name, "simulation starting");
        match self
            .service
            .start(ctx, persona_name, &user_name, &user_goal)
            .await
        {
            Ok(first_reply) => Ok(format!(
                "Simulation started with {persona_name}!\n\n{persona_name}: {first_reply}"
            )),
            Err(e) => {
                // Defensive unwind; start only fails before any API call
                let _ = ctx.session.end();
                ctx.discard_history();
                Err(e)
            }
        }
    }

    /// Handles free text during an active simulation.
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::NoActiveSimulation` while idle (an
    /// informational "nothing to do" response, not a fault).
    pub async fn on_free_text(&self, user_id: &str, text: &str) -> Result<String> {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let mut guard = ctx_arc.lock().await;
        let ctx = &mut *guard;

        if !ctx.session.is_active() {
            return Err(ParleyError::NoActiveSimulation);
        }

        Ok(self.service.continue_turn(ctx, text).await)
    }

    /// Handles an `/end` invocation: ends the active simulation and
    /// discards its history.
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::NoActiveSimulation` when nothing is running.
    pub async fn on_end_requested(&self, user_id: &str) -> Result<String> {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let mut guard = ctx_arc.lock().await;
        let ctx = &mut *guard;

        let persona = ctx.session.end()?;
        self.service.reset(ctx);
        info!(user_id, persona = persona.as_str(), "simulation ended");
        Ok(format!(
            "Simulation with {persona} ended. Your conversation history has been cleared. \
             Use /create to start a new one!"
        ))
    }

    /// Ordered persona options for the transport's selection menu.
    pub fn persona_options(&self) -> Vec<PersonaOption> {
        self.catalog.list_all()
    }

    /// The `/help` command listing.
    pub fn help_text(&self) -> String {
        HELP_REPLY.to_string()
    }

    /// The `/about` description.
    pub fn about_text(&self) -> String {
        ABOUT_REPLY.to_string()
    }

    /// The `/settings` view of the user's profile.
    pub async fn settings_text(&self, user_id: &str) -> String {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let ctx = ctx_arc.lock().await;
        format!(
            "Your current settings:\nName: {}\nGoal: {}",
            ctx.profile.display_name(),
            ctx.profile.stated_goal()
        )
    }

    /// Whether the user is mid-onboarding (transport routing aid).
    pub async fn is_onboarding(&self, user_id: &str) -> bool {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let ctx = ctx_arc.lock().await;
        !ctx.onboarding.is_done()
    }

    /// Routes one inbound event to the matching entry point.
    pub async fn handle_event(&self, user_id: &str, event: InboundEvent) -> Result<String> {
        match event {
            InboundEvent::Text(text) => {
                if self.is_onboarding(user_id).await {
                    self.on_onboarding_text(user_id, &text).await
                } else {
                    self.on_free_text(user_id, &text).await
                }
            }
            InboundEvent::Selection(persona) => self.on_persona_selected(user_id, &persona).await,
            InboundEvent::Command(command) => match command {
                Command::Start => self.on_start_requested(user_id).await,
                Command::Create => self.create_menu(user_id).await,
                Command::End => self.on_end_requested(user_id).await,
                Command::Help => Ok(self.help_text()),
                Command::About => Ok(self.about_text()),
                Command::Settings => Ok(self.settings_text(user_id).await),
                Command::Personas => Ok(self.format_persona_menu()),
                Command::InvestorPitch => self.on_persona_selected(user_id, "Investor").await,
            },
        }
    }

    /// The `/create` menu: rejected before onboarding, otherwise the
    /// selectable persona listing.
    async fn create_menu(&self, user_id: &str) -> Result<String> {
        let ctx_arc = self.registry.get_or_create(user_id).await;
        let ctx = ctx_arc.lock().await;
        if !ctx.profile.is_onboarded() {
            return Err(ParleyError::OnboardingRequired);
        }
        Ok(format!(
            "Select a persona - choose who you want to practice talking to:\n{}",
            self.format_persona_menu()
        ))
    }

    fn format_persona_menu(&self) -> String {
        self.persona_options()
            .iter()
            .map(|o| format!("  {} - {}", o.name, o.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{ConversationMessage, MessageRole};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedClient {
        outcomes: Mutex<VecDeque<Result<String>>>,
    }

    impl ScriptedClient {
        fn new(outcomes: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
            })
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, _messages: &[ConversationMessage]) -> Result<String> {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ParleyError::completion("script exhausted")))
        }
    }

    fn dispatcher(outcomes: Vec<Result<String>>) -> Dispatcher {
        Dispatcher::new(
            Arc::new(PersonaCatalog::with_defaults()),
            ScriptedClient::new(outcomes),
        )
    }

    async fn onboard(d: &Dispatcher, user: &str, name: &str, goal: &str) {
        d.on_start_requested(user).await.unwrap();
        d.on_onboarding_text(user, name).await.unwrap();
        d.on_onboarding_text(user, goal).await.unwrap();
    }

    async fn history_len(d: &Dispatcher, user: &str) -> Option<usize> {
        let ctx_arc = d.registry.get_or_create(user).await;
        let ctx = ctx_arc.lock().await;
        ctx.history().map(|h| h.len())
    }

    #[tokio::test]
    async fn test_full_scenario_ana_practices_interviews() {
        let d = dispatcher(vec![
            Ok("Tell me about yourself.".to_string()),
            Ok("Interesting, go on.".to_string()),
        ]);

        onboard(&d, "ana", "Ana", "practice interviews").await;

        // Select the Interviewer: prompt is personalized
        let reply = d.on_persona_selected("ana", "Interviewer").await.unwrap();
        assert!(reply.contains("Interviewer"));
        {
            let ctx_arc = d.registry.get_or_create("ana").await;
            let ctx = ctx_arc.lock().await;
            let first = &ctx.history().unwrap().messages()[0];
            assert_eq!(first.role, MessageRole::User);
            assert!(first.content.contains("Ana"));
            assert!(first.content.contains("practice interviews"));
        }

        // Selecting again is rejected and changes nothing
        let err = d.on_persona_selected("ana", "Investor").await.unwrap_err();
        assert_eq!(err, ParleyError::simulation_already_active("Interviewer"));

        // One free-text turn grows the history to 4
        let reply = d.on_free_text("ana", "Hello").await.unwrap();
        assert_eq!(reply, "Interesting, go on.");
        assert_eq!(history_len(&d, "ana").await, Some(4));

        // /end clears everything
        let reply = d.on_end_requested("ana").await.unwrap();
        assert!(reply.contains("Interviewer"));
        assert_eq!(history_len(&d, "ana").await, None);
        let err = d.on_free_text("ana", "still there?").await.unwrap_err();
        assert_eq!(err, ParleyError::NoActiveSimulation);
    }

    #[tokio::test]
    async fn test_selection_before_onboarding_creates_no_history() {
        let d = dispatcher(vec![Ok("never sent".to_string())]);

        let err = d
            .on_persona_selected("newbie", "Interviewer")
            .await
            .unwrap_err();
        assert_eq!(err, ParleyError::OnboardingRequired);
        assert_eq!(history_len(&d, "newbie").await, None);
    }

    #[tokio::test]
    async fn test_unknown_persona_selection_rejected() {
        let d = dispatcher(vec![Ok("never sent".to_string())]);
        onboard(&d, "ana", "Ana", "practice").await;

        let err = d.on_persona_selected("ana", "Ghost").await.unwrap_err();
        assert!(err.is_unknown_persona());
        assert_eq!(history_len(&d, "ana").await, None);
    }

    #[tokio::test]
    async fn test_free_text_while_idle_is_informational() {
        let d = dispatcher(vec![]);
        onboard(&d, "ana", "Ana", "practice").await;

        let err = d.on_free_text("ana", "hello?").await.unwrap_err();
        assert_eq!(err, ParleyError::NoActiveSimulation);
        assert!(err.is_policy_rejection());
    }

    #[tokio::test]
    async fn test_end_without_simulation_is_informational() {
        let d = dispatcher(vec![]);
        let err = d.on_end_requested("ana").await.unwrap_err();
        assert_eq!(err, ParleyError::NoActiveSimulation);
    }

    #[tokio::test]
    async fn test_onboarding_flow_and_welcome_back() {
        let d = dispatcher(vec![]);

        let reply = d.on_start_requested("ana").await.unwrap();
        assert!(reply.contains("what is your name?"));

        let reply = d.on_onboarding_text("ana", "Ana").await.unwrap();
        assert!(reply.contains("Ana"));

        let reply = d
            .on_onboarding_text("ana", "practice interviews")
            .await
            .unwrap();
        assert!(reply.contains("/create"));

        let reply = d.on_start_requested("ana").await.unwrap();
        assert!(reply.contains("Welcome back, Ana"));
        assert!(!d.is_onboarding("ana").await);
    }

    #[tokio::test]
    async fn test_investor_shortcut_starts_simulation() {
        let d = dispatcher(vec![Ok("Give me your pitch.".to_string())]);
        onboard(&d, "ana", "Ana", "practice pitching").await;

        let reply = d
            .handle_event("ana", InboundEvent::Command(Command::InvestorPitch))
            .await
            .unwrap();
        assert!(reply.contains("Investor"));
        assert_eq!(history_len(&d, "ana").await, Some(2));
    }

    #[tokio::test]
    async fn test_create_menu_requires_onboarding() {
        let d = dispatcher(vec![]);
        let err = d
            .handle_event("newbie", InboundEvent::Command(Command::Create))
            .await
            .unwrap_err();
        assert_eq!(err, ParleyError::OnboardingRequired);

        onboard(&d, "newbie", "Bo", "practice").await;
        let menu = d
            .handle_event("newbie", InboundEvent::Command(Command::Create))
            .await
            .unwrap();
        assert!(menu.contains("Interviewer"));
        assert!(menu.contains("Celebrity"));
    }

    #[tokio::test]
    async fn test_users_do_not_share_state() {
        let d = dispatcher(vec![
            Ok("Opening for Ana.".to_string()),
            Ok("Opening for Bo.".to_string()),
        ]);
        onboard(&d, "ana", "Ana", "practice").await;
        onboard(&d, "bo", "Bo", "negotiate").await;

        d.on_persona_selected("ana", "Interviewer").await.unwrap();
        d.on_persona_selected("bo", "Investor").await.unwrap();

        d.on_end_requested("ana").await.unwrap();
        // Bo's simulation is untouched by Ana's end
        assert_eq!(history_len(&d, "bo").await, Some(2));
        let err = d.on_persona_selected("bo", "Crush").await.unwrap_err();
        assert_eq!(err, ParleyError::simulation_already_active("Investor"));
    }

    #[tokio::test]
    async fn test_settings_reflect_profile() {
        let d = dispatcher(vec![]);
        let text = d.settings_text("newbie").await;
        assert!(text.contains("a valued user"));

        onboard(&d, "newbie", "Bo", "negotiate a raise").await;
        let text = d.settings_text("newbie").await;
        assert!(text.contains("Bo"));
        assert!(text.contains("negotiate a raise"));
    }
}
