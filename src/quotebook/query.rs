//! Matching and ranking of stored quotes.
//!
//! All functions here are pure over a corpus snapshot.

use super::Quote;
use rand::seq::SliceRandom;
use rand::Rng;

/// Author and date filters applied before choosing or ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    /// Author filter (absent or empty matches everyone).
    pub author: Option<String>,
    /// Date filter (absent or empty matches every date).
    pub date: Option<String>,
}

impl QuoteFilter {
    /// Creates a filter from optional author and date strings.
    pub fn new(author: Option<impl Into<String>>, date: Option<impl Into<String>>) -> Self {
        Self {
            author: author.map(Into::into),
            date: date.map(Into::into),
        }
    }

    /// A filter that matches every quote.
    pub fn any() -> Self {
        Self::default()
    }
}

/// Relevance of a search hit. `Containment` outranks every word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Number of query words found in the quote text.
    Words(usize),
    /// The query contains the quote text or the quote text contains the query.
    Containment,
}

/// A search hit with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedQuote {
    pub quote: Quote,
    pub priority: Priority,
}

/// Lower-cases and drops spaces so "Jane Doe" and "janedoe" compare equal.
fn normalize(s: &str) -> String {
    s.to_lowercase().replace(' ', "")
}

fn field_matches(query: Option<&str>, stored: &str) -> bool {
    let query = match query {
        Some(q) if !q.is_empty() => normalize(q),
        _ => return true,
    };
    let stored = normalize(stored);
    stored == query || stored.contains(&query) || query.contains(&stored)
}

/// Returns true if the quote satisfies both the author and the date filter.
pub fn matches(filter: &QuoteFilter, quote: &Quote) -> bool {
    field_matches(filter.author.as_deref(), &quote.author)
        && field_matches(filter.date.as_deref(), &quote.date)
}

/// Picks a uniformly random quote among those matching the filter.
pub fn choose<'a, R: Rng + ?Sized>(
    corpus: &'a [Quote],
    filter: &QuoteFilter,
    rng: &mut R,
) -> Option<&'a Quote> {
    let selection: Vec<&Quote> = corpus.iter().filter(|q| matches(filter, q)).collect();
    selection.choose(rng).copied()
}

/// Ranks the quotes matching the filter against free-text content.
///
/// Quotes that contain the content (or are contained by it) rank first; the
/// rest are scored by how many content words appear in their text, counting
/// repeated words once per occurrence. Zero-score quotes are dropped. Equal
/// priorities keep corpus order.
pub fn search(corpus: &[Quote], filter: &QuoteFilter, content: &str) -> Vec<RankedQuote> {
    let needle = content.to_lowercase();
    let words: Vec<&str> = needle.split_whitespace().collect();

    let mut results: Vec<RankedQuote> = corpus
        .iter()
        .filter(|quote| matches(filter, quote))
        .filter_map(|quote| {
            let haystack = quote.text.to_lowercase();
            let priority = if needle.contains(&haystack) || haystack.contains(&needle) {
                Priority::Containment
            } else {
                let count = words.iter().filter(|w| haystack.contains(*w)).count();
                if count == 0 {
                    return None;
                }
                Priority::Words(count)
            };
            Some(RankedQuote {
                quote: quote.clone(),
                priority,
            })
        })
        .collect();

    // sort_by is stable, so ties keep corpus order
    results.sort_by(|a, b| b.priority.cmp(&a.priority));
    results
}
