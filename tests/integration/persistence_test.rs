//! Integration tests for the quotebook file and legacy import.

use pretty_assertions::assert_eq;
use quote_scribe::persistence::{legacy, JsonQuoteStore, QuoteStore};
use quote_scribe::quotebook::{Quote, Quotebook};
use std::sync::Arc;
use tempfile::tempdir;

fn sample() -> Vec<Quote> {
    vec![
        Quote::new("hello world", "Jane Doe", "2021"),
        Quote::new("", "Silent Bob", ""),
        Quote::new("bye", "John", "3/14/22"),
    ]
}

#[tokio::test]
async fn test_load_twice_is_stable() {
    let dir = tempdir().unwrap();
    let store = JsonQuoteStore::new(dir.path().join("quotebook.json"));
    store.save(&sample()).await.unwrap();

    let first = store.load().await.unwrap();
    let second = store.load().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, sample());
}

#[tokio::test]
async fn test_append_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("quotebook.json");

    let book = Quotebook::open(Arc::new(JsonQuoteStore::new(&path)))
        .await
        .unwrap();
    assert!(book.is_empty().await);
    book.append(Quote::new("first", "Ann", "2020")).await.unwrap();
    book.append(Quote::new("second", "Ann", "2021")).await.unwrap();

    let reopened = Quotebook::open(Arc::new(JsonQuoteStore::new(&path)))
        .await
        .unwrap();
    assert_eq!(reopened.snapshot().await, book.snapshot().await);
    assert!(!dir.path().join("nested").join("quotebook.json.tmp").exists());
}

#[tokio::test]
async fn test_malformed_records_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    std::fs::write(
        &path,
        r#"[
            {"quote": "kept", "author": "Ann", "date": "2020"},
            {"quote": "no author"},
            {"quote": "blank author", "author": "  "},
            "not even an object",
            {"text": "old key", "author": "Bob"}
        ]"#,
    )
    .unwrap();

    let quotes = JsonQuoteStore::new(&path).load().await.unwrap();
    assert_eq!(
        quotes,
        vec![
            Quote::new("kept", "Ann", "2020"),
            Quote::new("old key", "Bob", ""),
        ]
    );
}

#[tokio::test]
async fn test_non_array_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    std::fs::write(&path, r#"{"quote": "x", "author": "y"}"#).unwrap();

    let err = JsonQuoteStore::new(&path).load().await.unwrap_err();
    assert_eq!(err.category(), "Persistence Error");
}

#[tokio::test]
async fn test_legacy_import() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotes.txt");
    std::fs::write(
        &path,
        "\"to be or not\" - Will 1600\nnot a quote line\n\"so it goes\" - Kurt 1969\n",
    )
    .unwrap();

    let quotes = legacy::import_file(&path).await.unwrap();
    assert_eq!(
        quotes,
        vec![
            Quote::new("to be or not", "Will", "1600"),
            Quote::new("so it goes", "Kurt", "1969"),
        ]
    );
}
