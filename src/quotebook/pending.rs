//! Drafted quotes awaiting their author's confirmation.

use super::Quote;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// At most one drafted quote per sender.
#[derive(Debug, Default)]
pub struct PendingQuotes {
    drafts: Mutex<HashMap<String, Quote>>,
}

impl PendingQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    // Every update is a single map call, so a poisoned map is still consistent
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Quote>> {
        self.drafts.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores a draft, returning the one it replaced.
    pub fn insert(&self, sender: &str, quote: Quote) -> Option<Quote> {
        self.lock().insert(sender.to_string(), quote)
    }

    /// Returns a copy of the sender's draft.
    pub fn get(&self, sender: &str) -> Option<Quote> {
        self.lock().get(sender).cloned()
    }

    /// Removes and returns the sender's draft.
    pub fn take(&self, sender: &str) -> Option<Quote> {
        self.lock().remove(sender)
    }

    /// Removes the draft only if it is still `expected`.
    ///
    /// A confirm that raced with a newer `-a` must not drop the newer draft.
    pub fn remove_if(&self, sender: &str, expected: &Quote) -> bool {
        let mut drafts = self.lock();
        if drafts.get(sender) == Some(expected) {
            drafts.remove(sender);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
