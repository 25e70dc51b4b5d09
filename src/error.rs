//! Error types for the scribe.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for scribe operations.
#[derive(Error, Debug)]
pub enum ScribeError {
    /// Malformed command arguments (missing author, unknown flag, etc.)
    #[error("Usage error: {0}")]
    Usage(String),

    /// Quotebook storage errors (unreadable file, failed rewrite, etc.)
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Card rendering errors (no backgrounds, undecodable image, missing font, etc.)
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors (invalid config file, bad paths, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chat transport errors (closed input, failed send, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScribeError {
    /// Creates a usage error with the given message.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Creates a persistence error with the given message.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Creates a render error with the given message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage(_) => "Usage Error",
            Self::Persistence(_) => "Persistence Error",
            Self::Render(_) => "Render Error",
            Self::Config(_) => "Configuration Error",
            Self::Transport(_) => "Transport Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ScribeError.
pub type Result<T> = std::result::Result<T, ScribeError>;
