//! Sale settings

use serde::{Deserialize, Serialize};

/// Point-of-sale settings
///
/// Owned by the settings screen; the terminal only reads it and applies a
/// replacement wholesale when new values are pushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleSettings {
    /// Tax rate in percentage (e.g., 10 = 10%)
    pub tax_rate: f64,
    /// Currency symbol for display
    pub currency: String,
    /// Round the grand total to the nearest whole unit before change
    pub auto_round: bool,
}

impl Default for SaleSettings {
    fn default() -> Self {
        Self {
            tax_rate: 10.0,
            currency: "$".to_string(),
            auto_round: false,
        }
    }
}
