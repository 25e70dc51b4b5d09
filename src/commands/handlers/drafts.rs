//! Add-quote flow: draft (`-a`), confirm (`-y`), cancel (`-n`).

use tracing::{info, warn};

use super::CommandContext;
use crate::commands::output::CommandOutput;
use crate::quotebook::Quote;

/// Handle `-a`: store a draft for the sender and show a preview.
pub fn handle_add_request(ctx: &CommandContext<'_>, quote: Quote) -> CommandOutput {
    let preview = quote.to_string();
    if let Some(previous) = ctx.pending.insert(ctx.sender, quote) {
        info!("{} replaced draft {}", ctx.sender, previous);
    }

    CommandOutput::info(format!(
        "The scribes have drafted this entry:\n{preview}\n\
         Reply `{t} -y` to inscribe it or `{t} -n` to discard it.",
        t = ctx.trigger
    ))
}

fn no_draft(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::error(format!(
        "You have no drafted quote. Use `{} -a <author> <date> <quote>` first.",
        ctx.trigger
    ))
}

/// Handle `-y`: commit the sender's draft.
///
/// The draft is only cleared once the quotebook write succeeds, so a failed
/// write can be retried with another `-y`.
pub async fn handle_confirm(ctx: &CommandContext<'_>) -> CommandOutput {
    let Some(quote) = ctx.pending.get(ctx.sender) else {
        return no_draft(ctx);
    };

    match ctx.quotebook.append(quote.clone()).await {
        Ok(len) => {
            ctx.pending.remove_if(ctx.sender, &quote);
            info!("{} inscribed quote #{}: {}", ctx.sender, len, quote);
            CommandOutput::info(format!("Inscribed into the quotebook: {quote}"))
        }
        Err(e) => {
            warn!("Failed to inscribe draft for {}: {}", ctx.sender, e);
            CommandOutput::error(format!(
                "The quotebook could not be written ({e}). \
                 Your draft is kept; reply `{} -y` to try again.",
                ctx.trigger
            ))
        }
    }
}

/// Handle `-n`: discard the sender's draft.
pub fn handle_cancel(ctx: &CommandContext<'_>) -> CommandOutput {
    match ctx.pending.take(ctx.sender) {
        Some(quote) => CommandOutput::info(format!("Draft discarded: {quote}")),
        None => no_draft(ctx),
    }
}
