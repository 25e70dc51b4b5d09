//! The quotebook: stored quotes and the in-memory corpus.
//!
//! `Quotebook` owns the corpus snapshot and the store it was loaded from.
//! Reads go against the snapshot; appends rewrite the whole store and swap
//! the snapshot only once the write has succeeded.

pub mod pending;
pub mod query;

pub use pending::PendingQuotes;
pub use query::{Priority, QuoteFilter, RankedQuote};

use crate::error::Result;
use crate::persistence::QuoteStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// A stored quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// What was said.
    #[serde(rename = "quote", alias = "text", default)]
    pub text: String,
    /// Who said it.
    pub author: String,
    /// When it was said, free-form.
    #[serde(default)]
    pub date: String,
}

impl Quote {
    /// Creates a new quote.
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            date: date.into(),
        }
    }

    /// Caption drawn as the main line of a card.
    pub fn caption(&self) -> String {
        format!("\"{}\"", self.text)
    }

    /// Attribution drawn under the caption.
    pub fn attribution(&self) -> String {
        format!("- {}, {}", self.author, self.date)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}, {}", self.text, self.author, self.date)
    }
}

/// The in-memory corpus backed by a quote store.
pub struct Quotebook {
    store: Arc<dyn QuoteStore>,
    quotes: RwLock<Vec<Quote>>,
}

impl Quotebook {
    /// Loads the corpus from the store.
    pub async fn open(store: Arc<dyn QuoteStore>) -> Result<Self> {
        let quotes = store.load().await?;
        info!("Loaded {} quotes from {}", quotes.len(), store.describe());
        Ok(Self {
            store,
            quotes: RwLock::new(quotes),
        })
    }

    /// Returns a copy of the current corpus.
    pub async fn snapshot(&self) -> Vec<Quote> {
        self.quotes.read().await.clone()
    }

    /// Number of stored quotes.
    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    /// Returns true if no quotes are stored.
    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }

    /// Picks a random quote matching the filter.
    pub async fn choose(&self, filter: &QuoteFilter) -> Option<Quote> {
        let quotes = self.quotes.read().await;
        let mut rng = rand::thread_rng();
        query::choose(&quotes, filter, &mut rng).cloned()
    }

    /// Ranks the quotes matching the filter against free-text content.
    pub async fn search(&self, filter: &QuoteFilter, content: &str) -> Vec<RankedQuote> {
        let quotes = self.quotes.read().await;
        query::search(&quotes, filter, content)
    }

    /// Appends a quote and rewrites the store.
    ///
    /// The in-memory corpus is only replaced after the store write succeeds,
    /// so a failed write leaves it untouched. Returns the new corpus length.
    pub async fn append(&self, quote: Quote) -> Result<usize> {
        let mut quotes = self.quotes.write().await;
        let mut next = quotes.clone();
        next.push(quote);
        self.store.save(&next).await?;
        *quotes = next;
        info!("Quotebook now holds {} quotes", quotes.len());
        Ok(quotes.len())
    }
}
