//! Chat transports.
//!
//! A transport delivers `(sender, text)` messages to the scribe and carries
//! its replies back. The scribe never depends on a particular chat platform.

pub mod console;

pub use console::ConsoleTransport;

use crate::commands::CommandOutput;
use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// A chat line and who sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub sender: String,
    pub text: String,
}

impl IncomingMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }
}

/// Trait for chat platforms.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Returns the stream of inbound messages.
    ///
    /// The stream ends when the platform disconnects. It can only be taken
    /// once.
    fn incoming(&self) -> Result<BoxStream<'static, Result<IncomingMessage>>>;

    /// Sends a reply addressed to `recipient`.
    async fn send(&self, recipient: &str, output: CommandOutput) -> Result<()>;
}
