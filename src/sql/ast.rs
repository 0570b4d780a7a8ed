//! Query representation for the fixed clause catalog
//!
//! The upstream language model is constrained to a small vocabulary of query
//! shapes, so the recognizer produces these tagged variants up front and the
//! executor evaluates them. Recognition is separated from evaluation; clause
//! text the recognizer does not know is silently ignored.

use crate::data::Table;

/// A recognized WHERE-clause shape with a fixed evaluation rule
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `<field> = '<value>'` for status, priority, or region; case-sensitive
    /// exact match on the captured token
    FieldEquals { field: String, value: String },
    /// `<field> < GETDATE()|CURRENT_DATE|NOW()` — field strictly before the
    /// evaluation time (due_date and scheduled_date)
    BeforeNow { field: String },
    /// `quantity_on_hand <= reorder_level`; skipped when either field is
    /// absent on the record
    QuantityAtOrBelowReorder,
    /// `order_date >= DATEADD(quarter, -1, ...)` — within the trailing
    /// window, approximated as now minus `months`, not fiscal quarters
    WithinPastMonths { field: String, months: u32 },
    /// The one hardcoded disjunction: status is exactly `delayed`, or status
    /// is `in-progress` with a scheduled date strictly in the past
    DelayedOrInProgressPast,
}

/// Sort direction; defaults to ascending when absent or unrecognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// `ORDER BY <column> [ASC|DESC]` with the column already resolved to its
/// internal field name
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub column: String,
    pub direction: Direction,
}

/// A fully recognized query, ready for staged evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub table: Table,
    pub predicates: Vec<Predicate>,
    pub order_by: Option<SortKey>,
    /// From `LIMIT <n>` or `SELECT TOP <n>`, whichever matched first
    pub limit: Option<usize>,
}
