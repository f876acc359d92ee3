//! Order Model

use serde::{Deserialize, Serialize};

/// Default customer for unregistered sales
pub const WALK_IN_CUSTOMER: &str = "Walk-in";

/// Order status as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

/// Order entity (archived sale)
///
/// Orders are immutable once created; edits to a sale are modeled as new
/// orders, never updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Backend row ID (assigned on insert)
    pub id: Option<i64>,
    /// Receipt number generated by the terminal (e.g. "ORD1700000000000")
    pub order_id: String,
    /// Sale timestamp (assigned by the backend)
    pub date: Option<String>,
    pub customer: String,
    /// Total units across all lines
    pub items: i32,
    /// Total amount in currency unit
    pub total: f64,
    /// Payment method (e.g. "Cash")
    pub payment: String,
    pub status: OrderStatus,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_id: String,
    pub customer: String,
    pub items: i32,
    pub total: f64,
    pub payment: String,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_backend_string() {
        let json = serde_json::to_string(&OrderStatus::Completed).unwrap();
        assert_eq!(json, "\"Completed\"");

        let parsed: OrderStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn order_decodes_backend_row() {
        let json = serde_json::json!({
            "id": 12,
            "order_id": "ORD1700000000000",
            "date": "2026-08-23 14:03:11",
            "customer": "Walk-in",
            "items": 3,
            "total": 33.0,
            "payment": "Cash",
            "status": "Completed"
        });
        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.id, Some(12));
        assert_eq!(order.items, 3);
        assert_eq!(order.status, OrderStatus::Completed);
    }
}
