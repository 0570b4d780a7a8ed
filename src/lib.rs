//! askebs — natural-language query assistant over mock EBS data
//!
//! A user types a question, an LLM translates it to a SQL-like query from a
//! fixed vocabulary, and a miniature execution engine applies it to four
//! in-memory mock collections (sales orders, work orders, invoices,
//! inventory). Results are tracked per question and polled over HTTP.
//!
//! The execution engine is deliberately not a SQL parser: it recognizes a
//! fixed catalog of clause shapes (the same shapes the LLM is prompted to
//! emit) and pipes a collection snapshot through filter → sort → limit.
//!
//! ## Example
//!
//! ```rust
//! use askebs::data::DataStore;
//! use askebs::sql::QueryExecutor;
//!
//! let store = DataStore::seeded();
//! let executor = QueryExecutor::new(&store);
//!
//! let rows = executor
//!     .execute("SELECT * FROM invoices WHERE status = 'overdue' ORDER BY due_date ASC LIMIT 10")
//!     .unwrap();
//! assert!(rows.len() <= 10);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod http;
pub mod nlq;
pub mod query;
pub mod sql;

// Re-export main types for convenience
pub use config::{Config, ConfigError, LlmProvider, NlqConfig};
pub use data::{DataStore, FieldValue, Record, Table};
pub use http::{AppState, HttpServer};
pub use nlq::{NlqError, NlqPipeline};
pub use query::{QueryRecord, QueryStatus, QueryStore};
pub use sql::{QueryExecutor, SqlError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
