//! Command handlers for the scribe.
//!
//! Each handler takes a command context and returns the reply to send.

pub mod drafts;
pub mod quotes;
pub mod system;

use std::sync::Arc;

use crate::quotebook::{PendingQuotes, Quotebook};
use crate::render::QuoteRenderer;

/// Context provided to command handlers.
pub struct CommandContext<'a> {
    /// The quote corpus.
    pub quotebook: &'a Quotebook,
    /// Drafts awaiting confirmation.
    pub pending: &'a PendingQuotes,
    /// Card renderer; `None` replies with plain text only.
    pub renderer: Option<&'a Arc<dyn QuoteRenderer>>,
    /// Token that addresses the scribe, for messages that mention commands.
    pub trigger: &'a str,
    /// Identity of the message author.
    pub sender: &'a str,
}
