//! Scribe - a chat-command quotebook with quote cards.

mod cli;

use std::sync::Arc;

use cli::Cli;
use quote_scribe::app;
use quote_scribe::commands::Dispatcher;
use quote_scribe::config::Config;
use quote_scribe::error::Result;
use quote_scribe::logging::{init_file_logging, init_stderr_logging};
use quote_scribe::persistence::{legacy, JsonQuoteStore, QuoteStore};
use quote_scribe::quotebook::Quotebook;
use quote_scribe::render::CardRenderer;
use quote_scribe::transport::ConsoleTransport;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    if cli.log_file {
        init_file_logging();
    } else {
        init_stderr_logging();
    }

    if let Err(e) = run(cli).await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let store = Arc::new(JsonQuoteStore::new(&config.storage.quotebook));

    if let Some(legacy_path) = &cli.import_legacy {
        return import_legacy(store.as_ref(), legacy_path).await;
    }

    let quotebook = Quotebook::open(store).await?;
    let mut dispatcher = Dispatcher::new(config.trigger.clone(), Arc::new(quotebook));

    if cli.no_cards {
        info!("Cards disabled, quotes will be sent as text");
    } else {
        match CardRenderer::from_config(&config.render) {
            Ok(renderer) => dispatcher = dispatcher.with_renderer(Arc::new(renderer)),
            Err(e) => warn!("Cards disabled, quotes will be sent as text: {}", e),
        }
    }

    let transport = Arc::new(ConsoleTransport::stdio(&config.console));
    app::run(Arc::new(dispatcher), transport).await
}

/// Appends every quote in a legacy text file to the quotebook.
async fn import_legacy(store: &JsonQuoteStore, legacy_path: &std::path::Path) -> Result<()> {
    let imported = legacy::import_file(legacy_path).await?;
    let mut quotes = store.load().await?;
    let before = quotes.len();
    quotes.extend(imported);
    store.save(&quotes).await?;

    info!(
        "Imported {} quotes from {} into {}",
        quotes.len() - before,
        legacy_path.display(),
        store.path().display()
    );
    Ok(())
}
