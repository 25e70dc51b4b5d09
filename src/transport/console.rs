//! Console transport: stdin lines in, stdout replies out.
//!
//! Each input line is one message. A line of the form `name: text` is sent
//! as `name`; anything else is sent as the configured default sender. Cards
//! are written to the output directory and their path is printed.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use super::{ChatTransport, IncomingMessage};
use crate::commands::CommandOutput;
use crate::config::ConsoleConfig;
use crate::error::{Result, ScribeError};

type Reader = Box<dyn AsyncBufRead + Send + Unpin>;
type Writer = Box<dyn AsyncWrite + Send + Unpin>;

/// Line-based transport over any reader/writer pair.
pub struct ConsoleTransport {
    default_sender: String,
    output_dir: PathBuf,
    input: Mutex<Option<Reader>>,
    output: tokio::sync::Mutex<Writer>,
    cards: AtomicUsize,
}

impl ConsoleTransport {
    /// Creates a transport on the process's stdin and stdout.
    pub fn stdio(config: &ConsoleConfig) -> Self {
        Self::new(
            config,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
    }

    /// Creates a transport on the given streams.
    pub fn new(
        config: &ConsoleConfig,
        input: impl AsyncBufRead + Send + Unpin + 'static,
        output: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        Self {
            default_sender: config.sender.clone(),
            output_dir: config.output_dir.clone(),
            input: Mutex::new(Some(Box::new(input))),
            output: tokio::sync::Mutex::new(Box::new(output)),
            cards: AtomicUsize::new(0),
        }
    }

    /// Writes a card to the output directory and returns its path.
    async fn save_card(&self, file_name: &str, png: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                ScribeError::transport(format!(
                    "Failed to create {}: {e}",
                    self.output_dir.display()
                ))
            })?;

        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("card");
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let n = self.cards.fetch_add(1, Ordering::Relaxed) + 1;
        let path = self.output_dir.join(format!("{stem}-{stamp}-{n}.png"));

        tokio::fs::write(&path, png).await.map_err(|e| {
            ScribeError::transport(format!("Failed to write {}: {e}", path.display()))
        })?;
        debug!("Saved card to {}", path.display());
        Ok(path)
    }
}

/// Decodes one raw input line. Invalid UTF-8 becomes U+FFFD.
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches(|c: char| c == '\n' || c == '\r')
        .to_string()
}

/// Splits `name: text` into sender and text.
fn split_sender(line: &str, default_sender: &str) -> IncomingMessage {
    if let Some((name, text)) = line.split_once(':') {
        let name = name.trim();
        if !name.is_empty() && !name.contains(char::is_whitespace) && !name.starts_with('!') {
            return IncomingMessage::new(name, text.trim());
        }
    }
    IncomingMessage::new(default_sender, line.trim())
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    fn incoming(&self) -> Result<BoxStream<'static, Result<IncomingMessage>>> {
        let reader = self
            .input
            .lock()
            .map_err(|_| ScribeError::internal("Console input lock poisoned"))?
            .take()
            .ok_or_else(|| ScribeError::transport("Console input is already being read"))?;

        let default_sender = self.default_sender.clone();
        // The reader is dropped after a read error, which ends the stream
        let messages = stream::unfold(Some(reader), move |reader| {
            let default_sender = default_sender.clone();
            async move {
                let mut reader = reader?;
                let mut buf = Vec::new();
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => None,
                    Ok(_) => {
                        let line = decode_line(&buf);
                        Some((Ok(split_sender(&line, &default_sender)), Some(reader)))
                    }
                    Err(e) => Some((
                        Err(ScribeError::transport(format!(
                            "Failed to read console input: {e}"
                        ))),
                        None,
                    )),
                }
            }
        });
        Ok(messages.boxed())
    }

    async fn send(&self, recipient: &str, output: CommandOutput) -> Result<()> {
        let text = match output {
            CommandOutput::Info(text) => format!("[{recipient}] {text}\n"),
            CommandOutput::Error(text) => format!("[{recipient}] error: {text}\n"),
            CommandOutput::Image {
                png,
                file_name,
                alt_text,
            } => {
                let path = self.save_card(&file_name, &png).await?;
                format!(
                    "[{recipient}] {alt_text}\n[{recipient}] card saved to {}\n",
                    path.display()
                )
            }
        };

        let mut out = self.output.lock().await;
        out.write_all(text.as_bytes())
            .await
            .map_err(|e| ScribeError::transport(format!("Failed to write reply: {e}")))?;
        out.flush()
            .await
            .map_err(|e| ScribeError::transport(format!("Failed to flush reply: {e}")))
    }
}
