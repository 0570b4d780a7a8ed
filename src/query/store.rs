//! Query record store
//!
//! Process-lifetime map from query id to lifecycle record. Records are
//! created on submission, completed exactly once by the background task that
//! owns them, and never deleted.

use super::record::QueryRecord;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use thiserror::Error;

/// Query store errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryStoreError {
    #[error("query not found: {0}")]
    NotFound(Uuid),
    #[error("query {0} was already completed")]
    AlreadyCompleted(Uuid),
}

pub type QueryStoreResult<T> = Result<T, QueryStoreError>;

/// Concurrency-safe map of query records
///
/// Single-writer-per-key discipline: only the background task spawned for a
/// given id calls the completion methods for that id.
#[derive(Debug, Default)]
pub struct QueryStore {
    records: RwLock<HashMap<Uuid, QueryRecord>>,
}

impl QueryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `processing` record for a question and return a copy of it
    pub async fn submit(&self, question: impl Into<String>) -> QueryRecord {
        let record = QueryRecord::new(question);
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        record
    }

    /// Look up a record by id
    pub async fn get(&self, id: Uuid) -> Option<QueryRecord> {
        self.records.read().await.get(&id).cloned()
    }

    /// Number of records ever submitted
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no query has been submitted yet
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Complete a record with execution results
    pub async fn complete_success(
        &self,
        id: Uuid,
        sql: String,
        interpretation: Option<String>,
        results: serde_json::Value,
        duration_ms: u64,
    ) -> QueryStoreResult<()> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(QueryStoreError::NotFound(id))?;
        if !record.complete_success(sql, interpretation, results, duration_ms) {
            warn!(query_id = %id, "ignoring duplicate success completion");
            return Err(QueryStoreError::AlreadyCompleted(id));
        }
        Ok(())
    }

    /// Complete a record with an error message
    pub async fn complete_error(
        &self,
        id: Uuid,
        message: String,
        sql: Option<String>,
    ) -> QueryStoreResult<()> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(QueryStoreError::NotFound(id))?;
        if !record.complete_error(message, sql) {
            warn!(query_id = %id, "ignoring duplicate error completion");
            return Err(QueryStoreError::AlreadyCompleted(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::record::QueryStatus;

    #[tokio::test]
    async fn test_submit_and_get() {
        let store = QueryStore::new();
        let record = store.submit("show pending invoices").await;

        let fetched = store.get(record.id).await.unwrap();
        assert_eq!(fetched.id, record.id);
        assert_eq!(fetched.status, QueryStatus::Processing);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = QueryStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_complete_success_then_reject_second_completion() {
        let store = QueryStore::new();
        let record = store.submit("q").await;

        store
            .complete_success(
                record.id,
                "SELECT * FROM invoices".to_string(),
                Some("All invoices".to_string()),
                serde_json::json!([]),
                3,
            )
            .await
            .unwrap();

        let err = store
            .complete_error(record.id, "late".to_string(), None)
            .await
            .unwrap_err();
        assert_eq!(err, QueryStoreError::AlreadyCompleted(record.id));

        let fetched = store.get(record.id).await.unwrap();
        assert_eq!(fetched.status, QueryStatus::Success);
    }

    #[tokio::test]
    async fn test_complete_unknown_id() {
        let store = QueryStore::new();
        let id = Uuid::new_v4();
        let err = store
            .complete_error(id, "boom".to_string(), None)
            .await
            .unwrap_err();
        assert_eq!(err, QueryStoreError::NotFound(id));
    }
}
