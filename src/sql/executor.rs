//! Staged query evaluation: table snapshot → filter → sort → limit
//!
//! Every stage is pure, synchronous, in-memory computation over a cloned
//! snapshot; the canonical store is never mutated. The evaluation time is an
//! explicit argument so overdue/trailing-window predicates are replayable.

use super::ast::{Direction, ParsedQuery, Predicate, SortKey};
use super::{parser, SqlResult};
use crate::data::{DataStore, FieldValue, Record};
use chrono::{DateTime, Months, Utc};
use std::cmp::Ordering;

/// Executes recognized queries against a read-only store snapshot
pub struct QueryExecutor<'a> {
    store: &'a DataStore,
}

impl<'a> QueryExecutor<'a> {
    /// Create a new executor over a store
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Recognize and run a query, evaluating time-relative predicates against
    /// the current wall clock.
    pub fn execute(&self, sql: &str) -> SqlResult<Vec<Record>> {
        self.execute_at(sql, Utc::now())
    }

    /// Recognize and run a query at an explicit evaluation time.
    pub fn execute_at(&self, sql: &str, now: DateTime<Utc>) -> SqlResult<Vec<Record>> {
        let query = parser::parse(sql)?;
        Ok(self.run(&query, now))
    }

    /// Run an already-recognized query.
    pub fn run(&self, query: &ParsedQuery, now: DateTime<Utc>) -> Vec<Record> {
        let mut rows = self.store.snapshot(query.table);

        rows.retain(|row| {
            query
                .predicates
                .iter()
                .all(|predicate| eval_predicate(predicate, row, now))
        });

        if let Some(ref sort) = query.order_by {
            sort_rows(&mut rows, sort);
        }

        if let Some(n) = query.limit {
            rows.truncate(n);
        }

        rows
    }
}

/// Evaluate one recognized predicate against a row.
///
/// A row passes by default; only a matched pattern whose condition fails
/// excludes it.
fn eval_predicate(predicate: &Predicate, row: &Record, now: DateTime<Utc>) -> bool {
    match predicate {
        Predicate::FieldEquals { field, value } => {
            row.get(field).and_then(|v| v.as_str()) == Some(value.as_str())
        }
        Predicate::BeforeNow { field } => date_field(row, field)
            .map(|d| d < now)
            .unwrap_or(false),
        Predicate::QuantityAtOrBelowReorder => {
            let qty = row.get_non_null("quantityOnHand").and_then(|v| v.to_number());
            let reorder = row.get_non_null("reorderLevel").and_then(|v| v.to_number());
            match (qty, reorder) {
                (Some(q), Some(r)) => q <= r,
                // Either field absent: check does not apply
                _ => true,
            }
        }
        Predicate::WithinPastMonths { field, months } => {
            let cutoff = now.checked_sub_months(Months::new(*months)).unwrap_or(now);
            date_field(row, field).map(|d| d >= cutoff).unwrap_or(false)
        }
        Predicate::DelayedOrInProgressPast => {
            let status = row.get("status").and_then(|v| v.as_str());
            match status {
                Some("delayed") => true,
                Some("in-progress") => date_field(row, "scheduledDate")
                    .map(|d| d < now)
                    .unwrap_or(false),
                _ => false,
            }
        }
    }
}

/// Date fields carry no time component; they compare as midnight UTC so a
/// date equal to today's is strictly before any later wall-clock `now`.
fn date_field(row: &Record, field: &str) -> Option<DateTime<Utc>> {
    row.get_non_null(field)
        .and_then(|v| v.to_date())
        .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Stable sort by one column with a per-pair inferred comparison domain.
///
/// Nulls and absent values sort last regardless of direction. Otherwise both
/// sides are compared as dates when both coerce to dates, as numbers when
/// both coerce to numbers, and as strings otherwise.
fn sort_rows(rows: &mut [Record], sort: &SortKey) {
    rows.sort_by(|a, b| {
        let va = a.get_non_null(&sort.column);
        let vb = b.get_non_null(&sort.column);
        match (va, vb) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ord = compare_values(a, b);
                match sort.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            }
        }
    });
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    if let (Some(da), Some(db)) = (a.to_date(), b.to_date()) {
        return da.cmp(&db);
    }
    if let (Some(na), Some(nb)) = (a.to_number(), b.to_number()) {
        return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
    }
    a.to_string().cmp(&b.to_string())
}
