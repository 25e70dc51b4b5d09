//! System command handlers (`-h`, usage errors).

use super::CommandContext;
use crate::commands::help::help_text;
use crate::commands::output::CommandOutput;
use crate::commands::tokenizer::ParseError;
use crate::error::ScribeError;

/// Handle `-h`.
pub fn handle_help(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::info(help_text(ctx.trigger))
}

/// Handle malformed arguments.
pub fn handle_invalid(ctx: &CommandContext<'_>, error: &ParseError) -> CommandOutput {
    let usage = ScribeError::usage(format!("{} {}", ctx.trigger, error));
    CommandOutput::error(usage.to_string())
}
