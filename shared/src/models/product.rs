//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    /// SKU code (unique, e.g. "P001")
    pub code: String,
    pub name: String,
    /// Category name (denormalized, not a reference)
    pub category: String,
    /// Sale price in currency unit
    pub price: f64,
    /// Cost price in currency unit
    pub cost: f64,
    /// On-hand units; the terminal never writes this below zero
    pub stock: i32,
    pub image: String,
    pub desc: Option<String>,
    pub status: String,
}

/// Update product payload
///
/// The backend applies exactly the fields present in the body, so omitted
/// fields must not be serialized at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ProductUpdate {
    /// Stock-only update, the terminal's reservation write
    pub fn stock(stock: i32) -> Self {
        Self {
            stock: Some(stock),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_update_serializes_only_the_stock_field() {
        let update = ProductUpdate::stock(7);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "stock": 7 }));
    }

    #[test]
    fn product_round_trips_with_null_desc() {
        let json = serde_json::json!({
            "id": 1,
            "code": "P001",
            "name": "Widget",
            "category": "General",
            "price": 10.0,
            "cost": 5.0,
            "stock": 5,
            "image": "",
            "desc": null,
            "status": "Active"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.stock, 5);
        assert!(product.desc.is_none());
    }
}
