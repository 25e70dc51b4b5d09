//! In-memory quote stores for testing.

use super::QuoteStore;
use crate::error::{Result, ScribeError};
use crate::quotebook::Quote;
use async_trait::async_trait;
use std::sync::Mutex;

/// A quote store that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryQuoteStore {
    quotes: Mutex<Vec<Quote>>,
}

impl MemoryQuoteStore {
    /// Creates a store seeded with the given quotes.
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Mutex::new(quotes),
        }
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn load(&self) -> Result<Vec<Quote>> {
        self.quotes
            .lock()
            .map(|q| q.clone())
            .map_err(|_| ScribeError::internal("Memory store lock poisoned"))
    }

    async fn save(&self, quotes: &[Quote]) -> Result<()> {
        let mut stored = self
            .quotes
            .lock()
            .map_err(|_| ScribeError::internal("Memory store lock poisoned"))?;
        *stored = quotes.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// A quote store that loads its seed but refuses every write.
#[derive(Debug)]
pub struct FailingQuoteStore {
    seed: Vec<Quote>,
}

impl FailingQuoteStore {
    /// Creates a failing store that loads the given quotes.
    pub fn new(seed: Vec<Quote>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl QuoteStore for FailingQuoteStore {
    async fn load(&self) -> Result<Vec<Quote>> {
        Ok(self.seed.clone())
    }

    async fn save(&self, _quotes: &[Quote]) -> Result<()> {
        Err(ScribeError::persistence("Disk is read-only"))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}
