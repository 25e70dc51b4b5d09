//! Transport-agnostic command output types.
//!
//! These types represent replies in a way that is independent of the chat
//! platform. Each transport converts them to its own representation.

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Informational reply (success, status, listings, etc.).
    Info(String),

    /// Error reply.
    Error(String),

    /// A rendered quote card.
    Image {
        /// PNG bytes.
        png: Vec<u8>,
        /// Suggested attachment name.
        file_name: String,
        /// Plain-text version of the card for transports without images.
        alt_text: String,
    },
}

/// Attachment name used for quote cards.
pub const CARD_FILE_NAME: &str = "quote.png";

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a card attachment.
    pub fn image(png: Vec<u8>, alt_text: impl Into<String>) -> Self {
        Self::Image {
            png,
            file_name: CARD_FILE_NAME.to_string(),
            alt_text: alt_text.into(),
        }
    }

    /// Text form of the output.
    pub fn text(&self) -> &str {
        match self {
            Self::Info(s) | Self::Error(s) => s,
            Self::Image { alt_text, .. } => alt_text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
