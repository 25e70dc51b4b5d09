//! Persistence layer for the quotebook.
//!
//! Quotes are stored as a single JSON array that is read whole and written
//! whole. The store sits behind the `QuoteStore` trait so the dispatcher can
//! be exercised against in-memory stores.

mod json;
pub mod legacy;
mod memory;

pub use json::JsonQuoteStore;
pub use memory::{FailingQuoteStore, MemoryQuoteStore};

use crate::error::Result;
use crate::quotebook::Quote;
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

/// Trait defining the interface for quote stores.
///
/// All operations are async and return Results with ScribeError.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Reads the whole corpus. Malformed records are logged and skipped.
    async fn load(&self) -> Result<Vec<Quote>>;

    /// Replaces the whole corpus.
    async fn save(&self, quotes: &[Quote]) -> Result<()>;

    /// Human-readable description of where quotes live, for logs.
    fn describe(&self) -> String;
}

/// Converts raw JSON records into quotes, skipping the ones that do not parse
/// or have no author.
pub(crate) fn quotes_from_records(records: Vec<Value>) -> Vec<Quote> {
    let mut quotes = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Quote>(record.clone()) {
            Ok(quote) if !quote.author.trim().is_empty() => quotes.push(quote),
            Ok(_) => warn!("Skipping quote #{index} with no author: {record}"),
            Err(e) => warn!("Could not parse quote #{index} ({e}): {record}"),
        }
    }

    quotes
}
