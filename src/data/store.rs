//! In-memory record store
//!
//! Holds the four mock collections. Collections are seeded once at process
//! start and never mutated; query execution works on cloned snapshots.

use super::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four queryable tables, in the fixed priority order used when matching
/// a table name inside generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    SalesOrders,
    WorkOrders,
    Invoices,
    InventoryItems,
}

impl Table {
    /// All tables in priority order (first substring match wins)
    pub const ALL: [Table; 4] = [
        Table::SalesOrders,
        Table::WorkOrders,
        Table::Invoices,
        Table::InventoryItems,
    ];

    /// The snake_case table name as it appears in generated SQL
    pub fn sql_name(&self) -> &'static str {
        match self {
            Table::SalesOrders => "sales_orders",
            Table::WorkOrders => "work_orders",
            Table::Invoices => "invoices",
            Table::InventoryItems => "inventory_items",
        }
    }

    /// Find the first table whose name occurs as a substring of the query,
    /// checked in priority order.
    pub fn find_in(sql: &str) -> Option<Table> {
        let lowered = sql.to_lowercase();
        Table::ALL
            .into_iter()
            .find(|table| lowered.contains(table.sql_name()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql_name())
    }
}

/// Read-only store of the four mock collections
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    sales_orders: Vec<Record>,
    work_orders: Vec<Record>,
    invoices: Vec<Record>,
    inventory_items: Vec<Record>,
}

impl DataStore {
    /// Create an empty store (used by tests to build fixtures)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with generated mock data
    pub fn seeded() -> Self {
        super::mock::generate()
    }

    /// Append a row to a table (seed/fixture construction only)
    pub fn push(&mut self, table: Table, record: Record) {
        self.rows_mut(table).push(record);
    }

    /// Borrow the rows of a table
    pub fn rows(&self, table: Table) -> &[Record] {
        match table {
            Table::SalesOrders => &self.sales_orders,
            Table::WorkOrders => &self.work_orders,
            Table::Invoices => &self.invoices,
            Table::InventoryItems => &self.inventory_items,
        }
    }

    /// Clone the rows of a table; execution never mutates the canonical store
    pub fn snapshot(&self, table: Table) -> Vec<Record> {
        self.rows(table).to_vec()
    }

    /// Row count for a table
    pub fn count(&self, table: Table) -> usize {
        self.rows(table).len()
    }

    fn rows_mut(&mut self, table: Table) -> &mut Vec<Record> {
        match table {
            Table::SalesOrders => &mut self.sales_orders,
            Table::WorkOrders => &mut self.work_orders,
            Table::Invoices => &mut self.invoices,
            Table::InventoryItems => &mut self.inventory_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_find_in_priority_order() {
        assert_eq!(
            Table::find_in("SELECT * FROM sales_orders"),
            Some(Table::SalesOrders)
        );
        assert_eq!(
            Table::find_in("select * from INVENTORY_ITEMS"),
            Some(Table::InventoryItems)
        );
        // Multiple matches: first in priority order wins
        assert_eq!(
            Table::find_in("SELECT * FROM invoices, sales_orders"),
            Some(Table::SalesOrders)
        );
        assert_eq!(Table::find_in("SELECT * FROM unknown_table"), None);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut store = DataStore::new();
        let mut record = Record::new();
        record.set("id", "x-1");
        store.push(Table::Invoices, record);

        let mut snap = store.snapshot(Table::Invoices);
        snap.clear();
        assert_eq!(store.count(Table::Invoices), 1);
    }

    #[test]
    fn test_seeded_store_populates_all_tables() {
        let store = DataStore::seeded();
        for table in Table::ALL {
            assert!(store.count(table) > 0, "{} is empty", table);
        }
    }
}
