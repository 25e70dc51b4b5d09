//! JSON file quote store.

use super::{quotes_from_records, QuoteStore};
use crate::error::{Result, ScribeError};
use crate::quotebook::Quote;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores the quotebook as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonQuoteStore {
    path: PathBuf,
}

impl JsonQuoteStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet; a missing file loads as an empty
    /// quotebook.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the quotebook file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "quotebook.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dirs(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ScribeError::persistence(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteStore for JsonQuoteStore {
    async fn load(&self) -> Result<Vec<Quote>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No quotebook at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ScribeError::persistence(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Value> = serde_json::from_str(&content).map_err(|e| {
            ScribeError::persistence(format!(
                "Quotebook {} is not a JSON array: {e}",
                self.path.display()
            ))
        })?;

        Ok(quotes_from_records(records))
    }

    async fn save(&self, quotes: &[Quote]) -> Result<()> {
        self.ensure_parent_dirs().await?;

        let json = serde_json::to_string_pretty(quotes)
            .map_err(|e| ScribeError::persistence(format!("Failed to serialize quotes: {e}")))?;

        // Write beside the target and rename so readers never see a partial file
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await.map_err(|e| {
            ScribeError::persistence(format!("Failed to write {}: {e}", temp.display()))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            ScribeError::persistence(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            ))
        })?;

        debug!("Wrote {} quotes to {}", quotes.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
