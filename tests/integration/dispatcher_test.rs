//! End-to-end command handling against a quotebook file.

use pretty_assertions::assert_eq;
use quote_scribe::commands::{CommandOutput, Dispatcher};
use quote_scribe::persistence::{FailingQuoteStore, JsonQuoteStore, QuoteStore};
use quote_scribe::quotebook::{Quote, Quotebook};
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

async fn open(path: &Path) -> Dispatcher {
    let quotebook = Quotebook::open(Arc::new(JsonQuoteStore::new(path)))
        .await
        .unwrap();
    Dispatcher::new("!q", Arc::new(quotebook))
}

fn seed(path: &Path) {
    let quotes = vec![
        Quote::new("hello", "Jane Doe", "2021"),
        Quote::new("hello world", "Jane Doe", "2021"),
        Quote::new("the world is wide", "Jane Doe", "2019"),
        Quote::new("goodbye", "John", "2020"),
    ];
    std::fs::write(path, serde_json::to_string(&quotes).unwrap()).unwrap();
}

async fn reply(d: &Dispatcher, sender: &str, text: &str) -> CommandOutput {
    d.handle(sender, text)
        .await
        .unwrap_or_else(|| panic!("no reply to {text:?}"))
}

#[tokio::test]
async fn test_add_then_cancel_leaves_corpus_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    seed(&path);
    let d = open(&path).await;

    reply(&d, "alice", r#"!q -a "Ann Lee" 2022 "a fresh quote""#).await;
    let output = reply(&d, "alice", "!q -n").await;
    assert!(!output.is_error());

    assert_eq!(d.quotebook().len().await, 4);
    assert_eq!(JsonQuoteStore::new(&path).load().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_add_then_confirm_appends_exactly_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    seed(&path);
    let d = open(&path).await;

    reply(&d, "alice", r#"!q -a "Ann Lee" 2022 "a fresh quote""#).await;
    assert_eq!(d.quotebook().len().await, 4);
    let output = reply(&d, "alice", "!q -y").await;
    assert!(!output.is_error(), "{output:?}");

    let expected = Quote::new("a fresh quote", "Ann Lee", "2022");
    let on_disk = JsonQuoteStore::new(&path).load().await.unwrap();
    assert_eq!(on_disk.len(), 5);
    assert_eq!(on_disk.last(), Some(&expected));
    assert_eq!(d.quotebook().snapshot().await, on_disk);

    // The draft is gone, so a second confirm has nothing to do
    assert!(reply(&d, "alice", "!q -y").await.is_error());
}

#[tokio::test]
async fn test_search_ranks_containment_first() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    seed(&path);
    let d = open(&path).await;

    let output = reply(&d, "bob", r#"!q -s "jane doe" hello world"#).await;
    let listing: Vec<&str> = output.text().lines().collect();
    assert_eq!(
        listing,
        vec![
            "Our scribes have searched the library and suggested these scrolls:",
            "```",
            "\"hello\" - Jane Doe, 2021",
            "\"hello world\" - Jane Doe, 2021",
            "\"the world is wide\" - Jane Doe, 2019",
            "```",
        ]
    );
}

#[tokio::test]
async fn test_search_with_date_filter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    seed(&path);
    let d = open(&path).await;

    let output = reply(&d, "bob", "!q -s jane 2019 world").await;
    assert!(output.text().contains("the world is wide"));
    assert!(!output.text().contains("hello"));
}

#[tokio::test]
async fn test_random_without_match() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    seed(&path);
    let d = open(&path).await;

    let output = reply(&d, "bob", "!q nobody").await;
    assert_eq!(
        output,
        CommandOutput::info("The scriptures contain no record to satisfy this request.")
    );
}

#[tokio::test]
async fn test_failed_write_can_be_retried() {
    let store = Arc::new(FailingQuoteStore::new(vec![]));
    let quotebook = Quotebook::open(store).await.unwrap();
    let d = Dispatcher::new("!q", Arc::new(quotebook));

    reply(&d, "alice", "!q -a Ann 2022 words").await;
    let first = reply(&d, "alice", "!q -y").await;
    let second = reply(&d, "alice", "!q -y").await;

    assert!(first.is_error());
    assert!(second.is_error());
    assert!(second.text().contains("Your draft is kept"));
    assert!(d.quotebook().is_empty().await);
    assert_eq!(d.pending().len(), 1);
}

#[tokio::test]
async fn test_unknown_flag_is_usage_error() {
    let dir = tempdir().unwrap();
    let d = open(&dir.path().join("quotebook.json")).await;

    let output = reply(&d, "bob", "!q -z").await;
    assert!(output.is_error());
    assert!(output.text().contains("Unknown option"));
}
