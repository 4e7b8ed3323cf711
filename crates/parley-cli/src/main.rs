//! Parley REPL.
//!
//! A rustyline front end standing in for the messaging transport: it
//! parses `/` commands, renders the persona menu, and delivers replies
//! for one local user. All conversation logic lives in parley-core.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use parley_core::dispatch::{Command, Dispatcher, InboundEvent};
use parley_core::persona::PersonaCatalog;
use parley_interaction::{ApiConfig, CompletionApiClient};

/// The single local user this REPL serves.
const USER_ID: &str = "cli-user";

const COMMANDS: &[&str] = &[
    "/start",
    "/create",
    "/end",
    "/help",
    "/about",
    "/settings",
    "/personas",
    "/investor_pitch",
    "/quit",
];

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley - persona role-play practice", long_about = None)]
struct Cli {
    /// Override the completion model name
    #[arg(long)]
    model: Option<String>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env().context("completion API is not configured")?;
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    let client = Arc::new(CompletionApiClient::new(config));
    let dispatcher = Dispatcher::new(Arc::new(PersonaCatalog::with_defaults()), client);

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!(
        "{}",
        "Parley - type /start to begin, /help for commands, /quit to leave.".bright_green()
    );

    // Whether the next bare line is a persona pick from the /create menu.
    let mut awaiting_selection = false;

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(input);

        if input.eq_ignore_ascii_case("/quit") || input.eq_ignore_ascii_case("/exit") {
            break;
        }

        let mut opened_menu = false;
        let event = if input.starts_with('/') {
            match Command::parse(input) {
                Some(command) => {
                    opened_menu = matches!(command, Command::Create);
                    InboundEvent::Command(command)
                }
                None => {
                    println!("{}", "Unknown command. Try /help.".yellow());
                    continue;
                }
            }
        } else if awaiting_selection {
            awaiting_selection = false;
            InboundEvent::Selection(input.to_string())
        } else {
            InboundEvent::Text(input.to_string())
        };

        match dispatcher.handle_event(USER_ID, event).await {
            Ok(reply) => {
                if opened_menu {
                    awaiting_selection = true;
                    println!("{}", reply.bright_white());
                    println!("{}", "Type a persona name to select it.".bright_cyan());
                } else {
                    println!("{}", reply.bright_white());
                }
            }
            Err(rejection) => println!("{}", rejection.to_string().yellow()),
        }
    }

    println!("{}", "Bye.".bright_green());
    Ok(())
}
