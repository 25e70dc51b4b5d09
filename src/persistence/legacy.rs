//! Importer for the legacy plain-text quotebook.
//!
//! The old format has one quote per line: `"text" - Author Name date`, where
//! the date is the last whitespace-separated word. Lines that do not fit are
//! logged and skipped.

use crate::error::{Result, ScribeError};
use crate::quotebook::Quote;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""(.*)" ?- ?(.*) (.*)"#).expect("legacy quote pattern is valid")
    })
}

/// Parses a single legacy line.
pub fn parse_line(line: &str) -> Option<Quote> {
    let caps = line_pattern().captures(line)?;
    let author = caps.get(2)?.as_str().trim();
    if author.is_empty() {
        return None;
    }
    Some(Quote::new(
        caps.get(1)?.as_str(),
        author,
        caps.get(3)?.as_str().trim(),
    ))
}

/// Parses a whole legacy quotebook.
pub fn parse(content: &str) -> Vec<Quote> {
    let mut quotes = Vec::new();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(quote) => quotes.push(quote),
            None => warn!("Could not parse quote on line {}: {line}", number + 1),
        }
    }

    quotes
}

/// Reads and parses a legacy quotebook file.
pub async fn import_file(path: &Path) -> Result<Vec<Quote>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        ScribeError::persistence(format!("Failed to read {}: {e}", path.display()))
    })?;
    let quotes = parse(&content);
    info!("Parsed {} legacy quotes from {}", quotes.len(), path.display());
    Ok(quotes)
}
