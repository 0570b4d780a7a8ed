//! Typed mock record kinds
//!
//! The generator builds these, then flattens them into loose [`Record`] rows
//! at seed time. Row field names are the camelCase internal names the SQL
//! column resolver targets.

use super::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sales order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Approved,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Work order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    Delayed,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::InProgress => "in-progress",
            WorkOrderStatus::Delayed => "delayed",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Work order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Pending,
    Approved,
    Paid,
    Overdue,
    Disputed,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Approved => "approved",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Disputed => "disputed",
        }
    }
}

/// A sales order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub order_date: NaiveDate,
    /// Decimal string, e.g. "12500.00"
    pub total_amount: String,
    pub status: OrderStatus,
    pub region: String,
    pub sales_rep: String,
}

impl SalesOrder {
    pub fn into_record(self) -> Record {
        let mut r = Record::new();
        r.set("id", self.id);
        r.set("orderNumber", self.order_number);
        r.set("customerName", self.customer_name);
        r.set("orderDate", self.order_date);
        r.set("totalAmount", self.total_amount);
        r.set("status", self.status.as_str());
        r.set("region", self.region);
        r.set("salesRep", self.sales_rep);
        r
    }
}

/// A maintenance work order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub work_order_number: String,
    pub description: String,
    pub assigned_to: String,
    pub status: WorkOrderStatus,
    pub priority: Priority,
    pub scheduled_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub department: String,
}

impl WorkOrder {
    pub fn into_record(self) -> Record {
        let mut r = Record::new();
        r.set("id", self.id);
        r.set("workOrderNumber", self.work_order_number);
        r.set("description", self.description);
        r.set("assignedTo", self.assigned_to);
        r.set("status", self.status.as_str());
        r.set("priority", self.priority.as_str());
        r.set("scheduledDate", self.scheduled_date);
        r.set("completionDate", self.completion_date);
        r.set("department", self.department);
        r
    }
}

/// A vendor invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub vendor_name: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Decimal string, e.g. "8400.00"
    pub amount: String,
    pub status: InvoiceStatus,
    pub payment_terms: String,
}

impl Invoice {
    pub fn into_record(self) -> Record {
        let mut r = Record::new();
        r.set("id", self.id);
        r.set("invoiceNumber", self.invoice_number);
        r.set("vendorName", self.vendor_name);
        r.set("invoiceDate", self.invoice_date);
        r.set("dueDate", self.due_date);
        r.set("amount", self.amount);
        r.set("status", self.status.as_str());
        r.set("paymentTerms", self.payment_terms);
        r
    }
}

/// A warehouse inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub quantity_on_hand: i64,
    pub unit_price: f64,
    pub reorder_level: i64,
    pub warehouse: String,
}

impl InventoryItem {
    pub fn into_record(self) -> Record {
        let mut r = Record::new();
        r.set("id", self.id);
        r.set("itemCode", self.item_code);
        r.set("itemName", self.item_name);
        r.set("category", self.category);
        r.set("quantityOnHand", self.quantity_on_hand);
        r.set("unitPrice", self.unit_price);
        r.set("reorderLevel", self.reorder_level);
        r.set("warehouse", self.warehouse);
        r
    }
}
