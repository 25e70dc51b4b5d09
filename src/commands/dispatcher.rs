//! Routes chat lines to handlers.
//!
//! The dispatcher owns the state a command can touch: the quotebook, the
//! drafts awaiting confirmation and the optional card renderer. Each is
//! injected so tests can run against in-memory stores.

use std::sync::Arc;

use tracing::debug;

use super::handlers::{drafts, quotes, system, CommandContext};
use super::output::CommandOutput;
use super::router::{Command, CommandRouter};
use crate::quotebook::{PendingQuotes, Quotebook};
use crate::render::QuoteRenderer;

/// Turns chat lines into replies.
pub struct Dispatcher {
    trigger: String,
    quotebook: Arc<Quotebook>,
    pending: PendingQuotes,
    renderer: Option<Arc<dyn QuoteRenderer>>,
}

impl Dispatcher {
    /// Creates a dispatcher that answers lines starting with `trigger`.
    pub fn new(trigger: impl Into<String>, quotebook: Arc<Quotebook>) -> Self {
        Self {
            trigger: trigger.into(),
            quotebook,
            pending: PendingQuotes::new(),
            renderer: None,
        }
    }

    /// Enables quote cards. Without a renderer, quotes are sent as text.
    pub fn with_renderer(mut self, renderer: Arc<dyn QuoteRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn quotebook(&self) -> &Quotebook {
        &self.quotebook
    }

    pub fn pending(&self) -> &PendingQuotes {
        &self.pending
    }

    /// Handles one chat line. Returns `None` for lines not addressed to the scribe.
    pub async fn handle(&self, sender: &str, text: &str) -> Option<CommandOutput> {
        let command = CommandRouter::parse(&self.trigger, text.trim())?;
        debug!("{} -> {:?}", sender, command);
        Some(self.execute(sender, command).await)
    }

    /// Runs a parsed command on behalf of `sender`.
    pub async fn execute(&self, sender: &str, command: Command) -> CommandOutput {
        let ctx = CommandContext {
            quotebook: &self.quotebook,
            pending: &self.pending,
            renderer: self.renderer.as_ref(),
            trigger: &self.trigger,
            sender,
        };

        match command {
            Command::Random(filter) => quotes::handle_random(&ctx, &filter).await,
            Command::Search(args) => quotes::handle_search(&ctx, &args).await,
            Command::AddRequest(quote) => drafts::handle_add_request(&ctx, quote),
            Command::Confirm => drafts::handle_confirm(&ctx).await,
            Command::Cancel => drafts::handle_cancel(&ctx),
            Command::Help => system::handle_help(&ctx),
            Command::Invalid(error) => system::handle_invalid(&ctx, &error),
        }
    }
}
