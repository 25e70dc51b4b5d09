//! A full console session through the message loop.

use quote_scribe::app;
use quote_scribe::commands::Dispatcher;
use quote_scribe::config::ConsoleConfig;
use quote_scribe::persistence::{JsonQuoteStore, QuoteStore};
use quote_scribe::quotebook::{Quote, Quotebook};
use quote_scribe::transport::ConsoleTransport;
use std::io::Cursor;
use std::sync::Arc;
use tempfile::tempdir;
use tokio::io::AsyncReadExt;

#[tokio::test]
async fn test_console_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    let quotebook = Quotebook::open(Arc::new(JsonQuoteStore::new(&path)))
        .await
        .unwrap();
    let dispatcher = Arc::new(Dispatcher::new("!q", Arc::new(quotebook)));

    let script = "\
alice: !q -a \"Ann Lee\" 2022 \"so it goes\"
bob: just chatting
alice: !q -y
bob: !q ann
";
    let (writer, mut reader) = tokio::io::duplex(64 * 1024);
    let config = ConsoleConfig {
        sender: "console".to_string(),
        output_dir: dir.path().join("cards"),
    };
    let transport = Arc::new(ConsoleTransport::new(
        &config,
        Cursor::new(script.as_bytes().to_vec()),
        writer,
    ));

    tokio_test::assert_ok!(app::run(dispatcher, transport).await);

    let mut printed = String::new();
    reader.read_to_string(&mut printed).await.unwrap();

    assert!(printed.contains("[alice] The scribes have drafted this entry:"));
    assert!(printed.contains("[alice] Inscribed into the quotebook: \"so it goes\" - Ann Lee, 2022"));
    assert!(!printed.contains("[bob] just chatting"));

    let stored = JsonQuoteStore::new(&path).load().await.unwrap();
    assert_eq!(stored, vec![Quote::new("so it goes", "Ann Lee", "2022")]);
}

#[tokio::test]
async fn test_undecodable_line_does_not_drop_later_commands() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotebook.json");
    std::fs::write(
        &path,
        serde_json::to_string(&[Quote::new("already here", "Ann", "2020")]).unwrap(),
    )
    .unwrap();
    let quotebook = Quotebook::open(Arc::new(JsonQuoteStore::new(&path)))
        .await
        .unwrap();
    let dispatcher = Arc::new(Dispatcher::new("!q", Arc::new(quotebook)));

    let mut script = b"alice: !q -a Bob 2021 words\n".to_vec();
    script.extend_from_slice(b"carol: caf\xe9\n");
    script.extend_from_slice(b"alice: !q -y\nbob: !q ann\n");

    let (writer, mut reader) = tokio::io::duplex(64 * 1024);
    let config = ConsoleConfig {
        sender: "console".to_string(),
        output_dir: dir.path().join("cards"),
    };
    let transport = Arc::new(ConsoleTransport::new(&config, Cursor::new(script), writer));

    tokio_test::assert_ok!(app::run(dispatcher, transport).await);

    let mut printed = String::new();
    reader.read_to_string(&mut printed).await.unwrap();
    assert!(printed.contains("[alice] Inscribed into the quotebook: \"words\" - Bob, 2021"));
    assert!(printed.contains("[bob] \"already here\" - Ann, 2020"));

    let stored = JsonQuoteStore::new(&path).load().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored.last(), Some(&Quote::new("words", "Bob", "2021")));
}
