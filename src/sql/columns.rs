//! Column name resolution
//!
//! Generated SQL uses snake_case column tokens; rows use camelCase internal
//! field names. The mapping is a fixed finite table, case-insensitive on the
//! input; unknown tokens pass through unchanged.

/// Resolve a SQL column token to the internal row field name.
pub fn resolve(token: &str) -> String {
    match token.to_lowercase().as_str() {
        "order_number" => "orderNumber",
        "customer_name" => "customerName",
        "order_date" => "orderDate",
        "total_amount" => "totalAmount",
        "sales_rep" => "salesRep",
        "work_order_number" => "workOrderNumber",
        "assigned_to" => "assignedTo",
        "scheduled_date" => "scheduledDate",
        "completion_date" => "completionDate",
        "invoice_number" => "invoiceNumber",
        "vendor_name" => "vendorName",
        "invoice_date" => "invoiceDate",
        "due_date" => "dueDate",
        "payment_terms" => "paymentTerms",
        "item_code" => "itemCode",
        "item_name" => "itemName",
        "quantity_on_hand" => "quantityOnHand",
        "unit_price" => "unitPrice",
        "reorder_level" => "reorderLevel",
        _ => return token.to_string(),
    }
    .to_string()
}
