//! Mock SQL execution engine
//!
//! Interprets the fixed catalog of generated query shapes and applies them to
//! the in-memory record sets as a filter → sort → limit pipeline. This is not
//! a general SQL engine: no JOINs, no aggregation, no arbitrary boolean
//! expression trees.

pub mod ast;
pub mod columns;
pub mod executor;
pub mod parser;

pub use ast::{Direction, ParsedQuery, Predicate, SortKey};
pub use executor::QueryExecutor;
pub use parser::parse;

use thiserror::Error;

/// Names of the supported tables, for the unknown-table diagnostic
pub const SUPPORTED_TABLES: [&str; 4] =
    ["sales_orders", "work_orders", "invoices", "inventory_items"];

/// Query recognition and execution errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// Input is not a SELECT statement. Non-retryable.
    #[error("unsupported statement: only SELECT queries are supported")]
    UnsupportedStatement,

    /// No recognized table name found in the query. Non-retryable.
    #[error("unknown table: query must reference one of sales_orders, work_orders, invoices, inventory_items")]
    UnknownTable,

    /// A LIMIT/TOP row count that is not a non-negative integer
    #[error("invalid row limit: {token:?}")]
    LimitParse { token: String },

    /// A failure inside the filter/sort/limit stages, annotated with the
    /// target table
    #[error("query execution failed for table {table}: {source}")]
    Execution {
        table: &'static str,
        #[source]
        source: Box<SqlError>,
    },
}

pub type SqlResult<T> = Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_table_message_lists_supported_tables() {
        let message = SqlError::UnknownTable.to_string();
        for table in SUPPORTED_TABLES {
            assert!(message.contains(table), "message missing {}", table);
        }
    }

    #[test]
    fn test_execution_error_preserves_cause() {
        let err = SqlError::Execution {
            table: "invoices",
            source: Box::new(SqlError::LimitParse {
                token: "abc".to_string(),
            }),
        };
        let message = err.to_string();
        assert!(message.contains("invoices"));
        assert!(message.contains("abc"));
    }
}
