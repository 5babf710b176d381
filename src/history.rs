use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::format::Format;
use crate::stats::{self, FileStats};
use crate::storage::Storage;

/// Storage key for the serialized history blob.
pub const HISTORY_KEY: &str = "history";

/// Maximum number of retained entries; the oldest insert is evicted first.
pub const HISTORY_CAP: usize = 50;

/// A previously previewed file: full content, stats, and last-touch time.
///
/// `name` is the unique key; `timestamp` is epoch millis of the last access
/// and drives both display ordering and the "time ago" label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub format: Format,
    pub content: String,
    pub stats: FileStats,
    pub timestamp: i64,
}

/// Ordered, deduplicated-by-name recent-files list.
///
/// The whole list is serialized as one JSON blob on every mutation and
/// deserialized once at construction. A missing or unparseable blob yields
/// an empty history; startup never fails on persisted state.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    storage: Box<dyn Storage>,
}

impl HistoryStore {
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let entries = storage
            .get(HISTORY_KEY)
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();
        Self { entries, storage }
    }

    /// Entries in stored order, most-recent-insert first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a fresh preview: replace any same-named entry, insert at the
    /// front, evict past the cap, persist.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.retain(|e| e.name != entry.name);
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        self.persist()
    }

    /// Refresh a replayed entry's last-access time in place.
    ///
    /// Replay deliberately does not reorder the list; only fresh records
    /// promote to the front. Returns a clone for re-display, with
    /// `stats.last_opened` already refreshed.
    pub fn touch(&mut self, name: &str) -> Result<Option<HistoryEntry>> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) else {
            return Ok(None);
        };
        entry.timestamp = stats::now_millis();
        entry.stats.refresh_opened();
        let copy = entry.clone();
        self.persist()?;
        Ok(Some(copy))
    }

    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.entries)?;
        self.storage.set(HISTORY_KEY, &blob)
    }
}
