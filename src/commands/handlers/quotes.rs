//! Read-only quote commands (random card, search).

use std::sync::Arc;

use tracing::{debug, warn};

use super::CommandContext;
use crate::commands::output::CommandOutput;
use crate::commands::router::SearchArgs;
use crate::quotebook::{Quote, QuoteFilter};
use crate::render::QuoteRenderer;

/// Reply when no quote matches a random request.
pub const NO_RECORD: &str = "The scriptures contain no record to satisfy this request.";

/// Reply when a search ranks nothing.
pub const NO_SCROLLS: &str = "Our scribes searched the library but found no matching scrolls.";

const SEARCH_HEADER: &str = "Our scribes have searched the library and suggested these scrolls:";

/// Handle a random quote request.
pub async fn handle_random(ctx: &CommandContext<'_>, filter: &QuoteFilter) -> CommandOutput {
    let Some(quote) = ctx.quotebook.choose(filter).await else {
        debug!("No quote matches {:?}", filter);
        return CommandOutput::info(NO_RECORD);
    };

    match ctx.renderer {
        Some(renderer) => render_card(Arc::clone(renderer), quote).await,
        None => CommandOutput::info(quote.to_string()),
    }
}

/// Renders off the async runtime, falling back to text on any failure.
async fn render_card(renderer: Arc<dyn QuoteRenderer>, quote: Quote) -> CommandOutput {
    let card_quote = quote.clone();
    match tokio::task::spawn_blocking(move || renderer.render(&card_quote)).await {
        Ok(Ok(card)) => {
            debug!("Rendered card on {}", card.background.display());
            CommandOutput::image(card.png, quote.to_string())
        }
        Ok(Err(e)) => {
            warn!("Card rendering failed, sending text instead: {}", e);
            CommandOutput::info(quote.to_string())
        }
        Err(e) => {
            warn!("Card rendering task failed, sending text instead: {}", e);
            CommandOutput::info(quote.to_string())
        }
    }
}

/// Handle `-s`.
pub async fn handle_search(ctx: &CommandContext<'_>, args: &SearchArgs) -> CommandOutput {
    let ranked = ctx.quotebook.search(&args.filter, &args.content).await;
    debug!("Search for {:?} ranked {} quotes", args.content, ranked.len());

    if ranked.is_empty() {
        return CommandOutput::info(NO_SCROLLS);
    }

    let mut msg = format!("{SEARCH_HEADER}\n```\n");
    for hit in &ranked {
        msg.push_str(&hit.quote.to_string());
        msg.push('\n');
    }
    msg.push_str("```");
    CommandOutput::info(msg)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{BrokenRenderer, EchoRenderer, Fixture};
    use super::*;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<Quote> {
        vec![
            Quote::new("hello", "Jane", "2021"),
            Quote::new("hello world", "Jane", "2021"),
            Quote::new("goodbye", "John", "2020"),
        ]
    }

    #[tokio::test]
    async fn test_random_without_renderer_sends_text() {
        let fixture = Fixture::new(corpus()).await;
        let filter = QuoteFilter::new(Some("john"), None::<String>);
        let output = handle_random(&fixture.ctx("alice"), &filter).await;
        assert_eq!(output, CommandOutput::info("\"goodbye\" - John, 2020"));
    }

    #[tokio::test]
    async fn test_random_no_match() {
        let fixture = Fixture::new(corpus()).await;
        let filter = QuoteFilter::new(Some("nobody"), None::<String>);
        let output = handle_random(&fixture.ctx("alice"), &filter).await;
        assert_eq!(output, CommandOutput::info(NO_RECORD));
    }

    #[tokio::test]
    async fn test_random_renders_card() {
        let fixture = Fixture::new(corpus()).await.with_renderer(EchoRenderer);
        let filter = QuoteFilter::new(Some("john"), Some("2020"));
        let output = handle_random(&fixture.ctx("alice"), &filter).await;
        assert_eq!(
            output,
            CommandOutput::image(b"goodbye".to_vec(), "\"goodbye\" - John, 2020")
        );
    }

    #[tokio::test]
    async fn test_render_failure_falls_back_to_text() {
        let fixture = Fixture::new(corpus()).await.with_renderer(BrokenRenderer);
        let filter = QuoteFilter::new(Some("john"), None::<String>);
        let output = handle_random(&fixture.ctx("alice"), &filter).await;
        assert_eq!(output, CommandOutput::info("\"goodbye\" - John, 2020"));
    }

    #[tokio::test]
    async fn test_search_lists_ranked_quotes() {
        let fixture = Fixture::new(corpus()).await;
        let args = SearchArgs {
            filter: QuoteFilter::new(Some("jane"), None::<String>),
            content: "hello world".to_string(),
        };
        let output = handle_search(&fixture.ctx("alice"), &args).await;
        assert_eq!(
            output.text(),
            "Our scribes have searched the library and suggested these scrolls:\n```\n\
             \"hello\" - Jane, 2021\n\"hello world\" - Jane, 2021\n```"
        );
    }

    #[tokio::test]
    async fn test_search_without_hits() {
        let fixture = Fixture::new(corpus()).await;
        let args = SearchArgs {
            filter: QuoteFilter::new(Some("john"), None::<String>),
            content: "hello".to_string(),
        };
        let output = handle_search(&fixture.ctx("alice"), &args).await;
        assert_eq!(output, CommandOutput::info(NO_SCROLLS));
    }
}
