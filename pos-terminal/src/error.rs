//! Session error types

use crate::ledger::LedgerError;
use thiserror::Error;

/// Session error type
///
/// Every failure is a value. Validation failures mutate nothing; ledger
/// failures state exactly what was left untouched.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Product has no remaining stock
    #[error("Out of stock: {name}")]
    OutOfStock { product_id: i64, name: String },

    /// Requested more units than the ledger has available
    #[error("Not enough stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: i64,
        name: String,
        /// Additional units requested beyond the current reservation
        requested: i32,
        available: i32,
    },

    /// Tendered amount does not cover the total
    #[error("Payment insufficient: paid {paid:.2}, required {required:.2}")]
    InsufficientPayment { paid: f64, required: f64 },

    /// Checkout attempted with no cart lines
    #[error("Cart is empty")]
    EmptyCart,

    /// Product does not exist on the ledger
    #[error("Product {0} not found")]
    ProductNotFound(i64),

    /// Cart line index out of range
    #[error("No cart line at index {0}")]
    LineNotFound(usize),

    /// Quantities below 1 are removals, not updates
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    /// The ledger did not confirm a read or write; local state untouched
    ///
    /// Cached product data may be stale after this; refresh before retrying.
    #[error("Stock update failed for product {product_id}: {source}")]
    LedgerWrite {
        product_id: i64,
        #[source]
        source: LedgerError,
    },

    /// Order submission failed; cart and reservations intact, retry is safe
    #[error("Order submission failed: {0}")]
    OrderSubmission(#[source] LedgerError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
