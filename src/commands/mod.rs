//! Command parsing and dispatch for the scribe.
//!
//! Parsing is kept apart from execution so the command grammar can be tested
//! without a quotebook.

pub mod dispatcher;
pub mod handlers;
pub mod help;
pub mod output;
pub mod router;
pub mod tokenizer;

pub use dispatcher::Dispatcher;
pub use handlers::CommandContext;
pub use output::CommandOutput;
pub use router::{Command, CommandRouter, SearchArgs};
pub use tokenizer::{tokenize, ParseError};
