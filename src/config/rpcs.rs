//! Persisted multi-chain RPC endpoint document
//!
//! One JSON file per deployment environment, accumulating endpoints across
//! runs. Entries are keyed by chain id; the `WS` field is a genuine
//! three-state optional (absent / present-empty / present-with-values) and
//! every write is a full-document rewrite.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoints stored for one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEntry {
    /// Chain id
    #[serde(rename = "chainId")]
    pub chain_id: u64,

    /// HTTP endpoints
    #[serde(rename = "HTTP", default)]
    pub http: Vec<String>,

    /// WebSocket endpoints. `None` means no WS channel is modeled for this
    /// chain and the key is omitted on disk; `Some(vec![])` round-trips as
    /// an empty array.
    #[serde(rename = "WS", default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<Vec<String>>,
}

/// The persisted document: an ordered list of entries, unique by chain id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RpcDocument {
    entries: Vec<RpcEntry>,
}

impl RpcDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidDocument(format!("{}: {}", path.display(), e)))?;

        let document: Self = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Load from a file, starting empty if the file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No RPC document at {}, starting empty", path.display());
            Ok(Self::new())
        }
    }

    /// Write the full document back, pretty-printed
    pub fn store(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::InvalidDocument(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');

        std::fs::write(path, content)
            .map_err(|e| ConfigError::InvalidDocument(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Wrote {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// All entries, in document order
    pub fn entries(&self) -> &[RpcEntry] {
        &self.entries
    }

    /// Entry for a chain, if one exists
    pub fn entry(&self, chain_id: u64) -> Option<&RpcEntry> {
        self.entries.iter().find(|e| e.chain_id == chain_id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge endpoints into the entry for `chain_id`, creating it at the
    /// end of the document if it does not exist.
    ///
    /// HTTP endpoints are concatenated with whatever is already stored,
    /// deduplicated preserving first occurrence, and stripped of empty
    /// sentinels. `ws: None` leaves the stored WS field completely
    /// untouched; `ws: Some(_)` (even empty) guarantees the field exists
    /// and merges into it the same way.
    pub fn merge(&mut self, chain_id: u64, http: &[String], ws: Option<&[String]>) {
        let entry = match self.entries.iter_mut().find(|e| e.chain_id == chain_id) {
            Some(entry) => entry,
            None => {
                tracing::debug!("Creating new entry for chain {}", chain_id);
                self.entries.push(RpcEntry {
                    chain_id,
                    http: Vec::new(),
                    ws: None,
                });
                self.entries.last_mut().unwrap()
            }
        };

        entry.http = merge_endpoint_lists(&entry.http, http);

        if let Some(ws) = ws {
            let existing = entry.ws.take().unwrap_or_default();
            entry.ws = Some(merge_endpoint_lists(&existing, ws));
        }
    }
}

/// Concatenate, dedup preserving first occurrence, drop empty sentinels
fn merge_endpoint_lists(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
    for url in existing.iter().chain(incoming) {
        if url.is_empty() {
            continue;
        }
        if !merged.iter().any(|u| u == url) {
            merged.push(url.clone());
        }
    }
    merged
}
