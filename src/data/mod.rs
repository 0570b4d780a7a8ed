//! In-memory mock EBS data: value types, rows, typed record kinds, and the
//! read-only store the query engine runs against.

pub mod mock;
pub mod model;
pub mod record;
pub mod store;
pub mod value;

pub use model::{
    InventoryItem, Invoice, InvoiceStatus, OrderStatus, Priority, SalesOrder, WorkOrder,
    WorkOrderStatus,
};
pub use record::Record;
pub use store::{DataStore, Table};
pub use value::FieldValue;
