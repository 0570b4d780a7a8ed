//! Lifecycle record for one natural-language question

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a submitted question
///
/// Transitions only `processing → success` or `processing → error`, exactly
/// once, and the record is immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Processing,
    Success,
    Error,
}

/// Tracks one question from submission through interpretation and execution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRecord {
    pub id: Uuid,
    pub question: String,
    pub generated_sql: Option<String>,
    pub interpretation: Option<String>,
    pub results: Option<serde_json::Value>,
    pub status: QueryStatus,
    pub error: Option<String>,
    pub duration_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl QueryRecord {
    /// Create a fresh `processing` record for a submitted question
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            generated_sql: None,
            interpretation: None,
            results: None,
            status: QueryStatus::Processing,
            error: None,
            duration_ms: None,
            created_at: Utc::now(),
        }
    }

    /// True while the background task is still running
    pub fn is_processing(&self) -> bool {
        self.status == QueryStatus::Processing
    }

    /// Record a successful outcome. Returns false if the record was already
    /// completed; completed records never change again.
    pub fn complete_success(
        &mut self,
        sql: String,
        interpretation: Option<String>,
        results: serde_json::Value,
        duration_ms: u64,
    ) -> bool {
        if !self.is_processing() {
            return false;
        }
        self.generated_sql = Some(sql);
        self.interpretation = interpretation;
        self.results = Some(results);
        self.duration_ms = Some(duration_ms);
        self.status = QueryStatus::Success;
        true
    }

    /// Record a failed outcome. Returns false if the record was already
    /// completed.
    pub fn complete_error(&mut self, message: String, sql: Option<String>) -> bool {
        if !self.is_processing() {
            return false;
        }
        self.generated_sql = sql;
        self.error = Some(message);
        self.status = QueryStatus::Error;
        true
    }
}
