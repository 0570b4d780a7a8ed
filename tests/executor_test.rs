//! End-to-end execution engine tests over seeded and fixture data

use askebs::data::{DataStore, Record, Table};
use askebs::sql::{QueryExecutor, SqlError};
use chrono::{DateTime, NaiveDate, Utc};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        .and_utc()
}

fn ids(rows: &[Record]) -> Vec<String> {
    rows.iter()
        .map(|r| r.get("id").and_then(|v| v.as_str()).unwrap().to_string())
        .collect()
}

#[test]
fn select_star_returns_full_collection_for_every_table() {
    let store = DataStore::seeded();
    let executor = QueryExecutor::new(&store);

    for table in Table::ALL {
        let sql = format!("SELECT * FROM {}", table.sql_name());
        let rows = executor.execute(&sql).unwrap();
        assert_eq!(rows.len(), store.count(table), "wrong count for {}", table);
        assert_eq!(rows, store.rows(table), "rows differ for {}", table);
    }
}

#[test]
fn non_select_input_is_rejected() {
    let store = DataStore::seeded();
    let err = QueryExecutor::new(&store).execute("not a select").unwrap_err();
    assert!(matches!(err, SqlError::UnsupportedStatement));
}

#[test]
fn unknown_table_error_lists_supported_tables() {
    let store = DataStore::seeded();
    let err = QueryExecutor::new(&store)
        .execute("SELECT * FROM nonexistent_table")
        .unwrap_err();
    assert!(matches!(err, SqlError::UnknownTable));
    let message = err.to_string();
    for table in Table::ALL {
        assert!(message.contains(table.sql_name()));
    }
}

#[test]
fn status_filter_returns_exactly_the_matching_subsequence() {
    let store = DataStore::seeded();
    let rows = QueryExecutor::new(&store)
        .execute("SELECT * FROM invoices WHERE status = 'pending'")
        .unwrap();

    for row in &rows {
        assert_eq!(row.get("status").and_then(|v| v.as_str()), Some("pending"));
    }

    let expected = store
        .rows(Table::Invoices)
        .iter()
        .filter(|r| r.get("status").and_then(|v| v.as_str()) == Some("pending"))
        .count();
    assert_eq!(rows.len(), expected);
}

#[test]
fn order_by_unit_price_desc_is_non_increasing_with_nulls_last() {
    let mut store = DataStore::new();
    for (id, price) in [("mid", Some(12.5)), ("high", Some(99.0)), ("low", Some(0.25))] {
        let mut r = Record::new();
        r.set("id", id);
        r.set("unitPrice", price.unwrap());
        store.push(Table::InventoryItems, r);
    }
    let mut unpriced = Record::new();
    unpriced.set("id", "unpriced");
    unpriced.set("unitPrice", askebs::FieldValue::Null);
    store.push(Table::InventoryItems, unpriced);

    let rows = QueryExecutor::new(&store)
        .execute("SELECT * FROM inventory_items ORDER BY unit_price DESC")
        .unwrap();

    assert_eq!(ids(&rows), vec!["high", "mid", "low", "unpriced"]);

    let prices: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.get("unitPrice").and_then(|v| v.to_number()))
        .collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn limit_caps_rows_and_is_exact_when_enough_remain() {
    let store = DataStore::seeded();
    let rows = QueryExecutor::new(&store)
        .execute("SELECT * FROM inventory_items LIMIT 5")
        .unwrap();
    // Seeded inventory has well over 5 rows
    assert_eq!(rows.len(), 5);

    let rows = QueryExecutor::new(&store)
        .execute("SELECT TOP 5 * FROM inventory_items")
        .unwrap();
    assert_eq!(rows.len(), 5);
}

#[test]
fn execution_is_idempotent_for_a_fixed_clock() {
    let store = DataStore::seeded();
    let executor = QueryExecutor::new(&store);
    let now = at(2026, 8, 30);
    let sql = "SELECT * FROM invoices WHERE due_date < GETDATE() ORDER BY due_date ASC LIMIT 10";

    let first = executor.execute_at(sql, now).unwrap();
    let second = executor.execute_at(sql, now).unwrap();
    assert_eq!(first, second);
}

#[test]
fn delayed_or_in_progress_work_order_scenario() {
    let mut store = DataStore::new();

    let mut delayed = Record::new();
    delayed.set("id", "delayed-wo");
    delayed.set("status", "delayed");
    delayed.set("scheduledDate", NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
    store.push(Table::WorkOrders, delayed);

    let mut in_progress = Record::new();
    in_progress.set("id", "late-wo");
    in_progress.set("status", "in-progress");
    in_progress.set("scheduledDate", NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    store.push(Table::WorkOrders, in_progress);

    let mut completed = Record::new();
    completed.set("id", "done-wo");
    completed.set("status", "completed");
    completed.set("scheduledDate", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    store.push(Table::WorkOrders, completed);

    let rows = QueryExecutor::new(&store)
        .execute_at(
            "SELECT * FROM work_orders WHERE status = 'delayed' OR \
             (status = 'in-progress' AND scheduled_date < GETDATE()) \
             ORDER BY scheduled_date ASC LIMIT 20",
            at(2024, 6, 15),
        )
        .unwrap();

    // Oldest scheduled date first: the late in-progress order, then the
    // delayed one; the completed order is excluded.
    assert_eq!(ids(&rows), vec!["late-wo", "delayed-wo"]);
}

#[test]
fn reorder_level_scenario() {
    let mut store = DataStore::new();

    let mut low = Record::new();
    low.set("id", "low-stock");
    low.set("quantityOnHand", 10i64);
    low.set("reorderLevel", 50i64);
    store.push(Table::InventoryItems, low);

    let mut high = Record::new();
    high.set("id", "well-stocked");
    high.set("quantityOnHand", 80i64);
    high.set("reorderLevel", 20i64);
    store.push(Table::InventoryItems, high);

    let rows = QueryExecutor::new(&store)
        .execute("SELECT * FROM inventory_items WHERE quantity_on_hand <= reorder_level")
        .unwrap();

    assert_eq!(ids(&rows), vec!["low-stock"]);
}

#[test]
fn region_filter_combined_with_quarter_window() {
    let mut store = DataStore::new();
    for (id, region, date) in [
        ("keep", "West", "2024-05-20"),
        ("wrong-region", "East", "2024-05-21"),
        ("too-old", "West", "2024-01-05"),
    ] {
        let mut r = Record::new();
        r.set("id", id);
        r.set("region", region);
        r.set("orderDate", NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap());
        store.push(Table::SalesOrders, r);
    }

    let rows = QueryExecutor::new(&store)
        .execute_at(
            "SELECT * FROM sales_orders WHERE region = 'West' \
             AND order_date >= DATEADD(quarter, -1, GETDATE())",
            at(2024, 6, 15),
        )
        .unwrap();

    assert_eq!(ids(&rows), vec!["keep"]);
}

#[test]
fn status_equality_is_case_sensitive() {
    let mut store = DataStore::new();
    let mut r = Record::new();
    r.set("id", "x");
    r.set("status", "Pending");
    store.push(Table::Invoices, r);

    let rows = QueryExecutor::new(&store)
        .execute("SELECT * FROM invoices WHERE status = 'pending'")
        .unwrap();
    assert!(rows.is_empty());
}
