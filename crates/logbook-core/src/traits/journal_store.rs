//! Journal store trait and related types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::LogbookResult;
use crate::journal::{to_condensed_summary, to_markdown, GeneratedJournalEntry};
use crate::session::SessionStats;

/// A journal entry with its renderings, ready for durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub entry: GeneratedJournalEntry,
    /// Full markdown document.
    pub markdown: String,
    /// Condensed plain-text summary.
    pub condensed: String,
    /// Session statistics at generation time, if a session was active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SessionStats>,
}

impl JournalRecord {
    /// Render an entry at the given instant.
    pub fn new(entry: GeneratedJournalEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            markdown: to_markdown(&entry, &created_at),
            condensed: to_condensed_summary(&entry),
            entry,
            stats: None,
        }
    }

    /// Attach session statistics.
    pub fn with_stats(mut self, stats: SessionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Serialize to JSON for storage collaborators that take documents.
    pub fn to_json(&self) -> LogbookResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Durable storage for generated journals.
///
/// Implemented by the persistence layer (e.g. a vector-database-backed
/// semantic store). Returns the id under which the record was stored.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Store a journal record.
    async fn store_journal(&self, record: &JournalRecord) -> LogbookResult<String>;
}

/// In-memory journal store.
#[derive(Debug, Default)]
pub struct InMemoryJournalStore {
    records: RwLock<Vec<JournalRecord>>,
}

impl InMemoryJournalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, in insertion order.
    pub async fn records(&self) -> Vec<JournalRecord> {
        self.records.read().await.clone()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Check if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl JournalStore for InMemoryJournalStore {
    async fn store_journal(&self, record: &JournalRecord) -> LogbookResult<String> {
        self.records.write().await.push(record.clone());
        Ok(record.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::assemble;
    use chrono::TimeZone;

    fn record() -> JournalRecord {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        JournalRecord::new(assemble("Implemented the cache layer.", None), at)
    }

    #[test]
    fn test_record_renders_entry() {
        let record = record();
        assert!(record.markdown.starts_with("## Session: Friday, January 5, 2024"));
        assert!(record.markdown.contains("- the cache layer"));
        assert!(record.condensed.starts_with("Session focused on the cache layer."));
        assert!(record.stats.is_none());
    }

    #[test]
    fn test_record_to_json() {
        let json = record().to_json().unwrap();
        assert!(json.contains("createdAt"));
        assert!(json.contains("workCompleted"));
        assert!(!json.contains("stats"));
    }

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = InMemoryJournalStore::new();
        assert!(store.is_empty().await);

        let record = record();
        let id = store.store_journal(&record).await.unwrap();
        assert_eq!(id, record.id.to_string());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.records().await[0], record);
    }
}
