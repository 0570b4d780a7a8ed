//! Mock EBS data generation
//!
//! Synthetic stand-in records emulating an ERP dataset. Regenerated at every
//! process start, never persisted. Dates are spread around the current day so
//! the overdue/last-quarter predicates always have matches to return.

use super::model::{
    InventoryItem, Invoice, InvoiceStatus, OrderStatus, Priority, SalesOrder, WorkOrder,
    WorkOrderStatus,
};
use super::store::{DataStore, Table};
use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const CUSTOMERS: &[&str] = &[
    "Acme Manufacturing",
    "Global Industries",
    "TechCorp Solutions",
    "Summit Enterprises",
    "Pioneer Systems",
    "Atlas Logistics",
    "Meridian Group",
    "Cascade Partners",
];

const VENDORS: &[&str] = &[
    "Office Supplies Co",
    "Industrial Parts Inc",
    "Tech Equipment Ltd",
    "Facility Services Group",
    "Raw Materials Corp",
    "Packaging Solutions",
];

const REGIONS: &[&str] = &["North", "South", "East", "West", "Central"];

const SALES_REPS: &[&str] = &[
    "John Smith",
    "Sarah Johnson",
    "Mike Chen",
    "Lisa Rodriguez",
    "David Kim",
];

const TECHNICIANS: &[&str] = &[
    "Tom Wilson",
    "Maria Garcia",
    "James Lee",
    "Angela Davis",
    "Robert Brown",
];

const DEPARTMENTS: &[&str] = &["Maintenance", "Facilities", "Production", "Quality"];

const WORK_DESCRIPTIONS: &[&str] = &[
    "Replace conveyor belt on line 2",
    "Repair HVAC unit in warehouse B",
    "Calibrate CNC machine",
    "Inspect forklift fleet",
    "Service packaging robot",
    "Replace hydraulic pump",
    "Preventive maintenance on compressor",
    "Upgrade control panel wiring",
];

const CATEGORIES: &[&str] = &["Raw Materials", "Components", "Finished Goods", "Supplies"];

const WAREHOUSES: &[&str] = &["WH-EAST", "WH-WEST", "WH-CENTRAL"];

const ITEM_NAMES: &[&str] = &[
    "Steel Bracket",
    "Rubber Gasket",
    "Circuit Board",
    "Bearing Assembly",
    "Copper Wire Spool",
    "Hydraulic Fluid",
    "Safety Gloves",
    "Drive Belt",
    "Sensor Module",
    "Mounting Plate",
];

const PAYMENT_TERMS: &[&str] = &["Net 30", "Net 45", "Net 60", "Due on Receipt"];

/// Generate a freshly seeded store
pub fn generate() -> DataStore {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let mut store = DataStore::new();

    for order in sales_orders(&mut rng, today) {
        store.push(Table::SalesOrders, order.into_record());
    }
    for wo in work_orders(&mut rng, today) {
        store.push(Table::WorkOrders, wo.into_record());
    }
    for invoice in invoices(&mut rng, today) {
        store.push(Table::Invoices, invoice.into_record());
    }
    for item in inventory_items(&mut rng) {
        store.push(Table::InventoryItems, item.into_record());
    }

    store
}

fn days_around<R: Rng>(rng: &mut R, today: NaiveDate, past: i64, future: i64) -> NaiveDate {
    today + Duration::days(rng.gen_range(-past..=future))
}

fn amount<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    format!("{:.2}", rng.gen_range(min..max))
}

fn sales_orders<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<SalesOrder> {
    let statuses = [
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
    (0..25)
        .map(|i| SalesOrder {
            id: format!("so-{:03}", i + 1),
            order_number: format!("SO-{}", 10001 + i),
            customer_name: CUSTOMERS.choose(rng).unwrap().to_string(),
            // Spread across ~5 months so "last quarter" filters have both hits and misses
            order_date: days_around(rng, today, 150, 0),
            total_amount: amount(rng, 500.0, 75_000.0),
            status: *statuses.choose(rng).unwrap(),
            region: REGIONS.choose(rng).unwrap().to_string(),
            sales_rep: SALES_REPS.choose(rng).unwrap().to_string(),
        })
        .collect()
}

fn work_orders<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<WorkOrder> {
    let statuses = [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Delayed,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Cancelled,
    ];
    let priorities = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];
    (0..20)
        .map(|i| {
            let status = *statuses.choose(rng).unwrap();
            let scheduled_date = days_around(rng, today, 45, 30);
            let completion_date = match status {
                WorkOrderStatus::Completed => {
                    Some(scheduled_date + Duration::days(rng.gen_range(0..5)))
                }
                _ => None,
            };
            WorkOrder {
                id: format!("wo-{:03}", i + 1),
                work_order_number: format!("WO-{}", 20001 + i),
                description: WORK_DESCRIPTIONS.choose(rng).unwrap().to_string(),
                assigned_to: TECHNICIANS.choose(rng).unwrap().to_string(),
                status,
                priority: *priorities.choose(rng).unwrap(),
                scheduled_date,
                completion_date,
                department: DEPARTMENTS.choose(rng).unwrap().to_string(),
            }
        })
        .collect()
}

fn invoices<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<Invoice> {
    let statuses = [
        InvoiceStatus::Pending,
        InvoiceStatus::Approved,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Disputed,
    ];
    (0..20)
        .map(|i| {
            let invoice_date = days_around(rng, today, 90, 0);
            Invoice {
                id: format!("inv-{:03}", i + 1),
                invoice_number: format!("INV-{}", 30001 + i),
                vendor_name: VENDORS.choose(rng).unwrap().to_string(),
                invoice_date,
                due_date: invoice_date + Duration::days(rng.gen_range(15..60)),
                amount: amount(rng, 100.0, 25_000.0),
                status: *statuses.choose(rng).unwrap(),
                payment_terms: PAYMENT_TERMS.choose(rng).unwrap().to_string(),
            }
        })
        .collect()
}

fn inventory_items<R: Rng>(rng: &mut R) -> Vec<InventoryItem> {
    (0..30)
        .map(|i| {
            let reorder_level = rng.gen_range(10..100);
            // Roughly a third of items sit at or below their reorder level
            let quantity_on_hand = if rng.gen_bool(0.35) {
                rng.gen_range(0..=reorder_level)
            } else {
                rng.gen_range(reorder_level + 1..reorder_level + 400)
            };
            InventoryItem {
                id: format!("item-{:03}", i + 1),
                item_code: format!("ITM-{:04}", 4001 + i),
                item_name: ITEM_NAMES.choose(rng).unwrap().to_string(),
                category: CATEGORIES.choose(rng).unwrap().to_string(),
                quantity_on_hand,
                unit_price: (rng.gen_range(100..50_000) as f64) / 100.0,
                reorder_level,
                warehouse: WAREHOUSES.choose(rng).unwrap().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_counts() {
        let store = generate();
        assert_eq!(store.count(Table::SalesOrders), 25);
        assert_eq!(store.count(Table::WorkOrders), 20);
        assert_eq!(store.count(Table::Invoices), 20);
        assert_eq!(store.count(Table::InventoryItems), 30);
    }

    #[test]
    fn test_rows_carry_expected_fields() {
        let store = generate();
        let order = &store.rows(Table::SalesOrders)[0];
        assert!(order.has("orderNumber"));
        assert!(order.has("totalAmount"));
        assert!(order.get("orderDate").unwrap().to_date().is_some());

        let item = &store.rows(Table::InventoryItems)[0];
        assert!(item.get("quantityOnHand").unwrap().as_integer().is_some());
        assert!(item.get("reorderLevel").unwrap().as_integer().is_some());
    }

    #[test]
    fn test_completed_work_orders_have_completion_dates() {
        let store = generate();
        for row in store.rows(Table::WorkOrders) {
            let status = row.get("status").and_then(|v| v.as_str()).unwrap();
            let completed = row.get_non_null("completionDate").is_some();
            if status == "completed" {
                assert!(completed);
            } else {
                assert!(!completed);
            }
        }
    }
}
