//! API response types

use serde::{Deserialize, Serialize};

/// Plain acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Dashboard summary figures
///
/// The backend serves these with camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: i64,
    /// Sum of price * stock across the catalog
    pub total_stock_value: f64,
    pub today_sales: f64,
    /// Products with fewer than 5 units on hand
    pub low_stock_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_decodes_camel_case_keys() {
        let json = serde_json::json!({
            "totalProducts": 42,
            "totalStockValue": 1234.5,
            "todaySales": 99.0,
            "lowStockCount": 3
        });
        let summary: DashboardSummary = serde_json::from_value(json).unwrap();
        assert_eq!(summary.total_products, 42);
        assert_eq!(summary.low_stock_count, 3);
    }
}
