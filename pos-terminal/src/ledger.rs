//! Ledger traits over the inventory backend
//!
//! The terminal reads product records and overwrites stock levels. The
//! backend exposes no compare-and-swap, so ordering is the caller's job:
//! one session issues one write at a time (see
//! [`PosSession`](crate::session::PosSession)).

use async_trait::async_trait;
use shared::models::{OrderCreate, Product};
use store_client::{ClientError, StoreClient};
use thiserror::Error;

/// Ledger error type
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Product does not exist
    #[error("Product {0} not found")]
    ProductNotFound(i64),

    /// Request did not complete (connection, timeout, server fault)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend processed and rejected the request
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Authoritative stock reads and writes
#[async_trait]
pub trait StockLedger {
    /// Fetch the current product record, including its stock level
    async fn fetch_product(&self, product_id: i64) -> Result<Product, LedgerError>;

    /// Overwrite the product's stock level
    ///
    /// Unconditional last-writer-wins; returns only after the backend
    /// confirms.
    async fn write_stock(&self, product_id: i64, new_stock: i32) -> Result<(), LedgerError>;
}

/// Completed-sale submission
#[async_trait]
pub trait OrderLedger {
    /// Record a completed sale
    async fn submit_order(&self, order: &OrderCreate) -> Result<(), LedgerError>;
}

#[async_trait]
impl StockLedger for StoreClient {
    async fn fetch_product(&self, product_id: i64) -> Result<Product, LedgerError> {
        self.get_product(product_id)
            .await
            .map_err(|err| ledger_error(product_id, err))
    }

    async fn write_stock(&self, product_id: i64, new_stock: i32) -> Result<(), LedgerError> {
        self.update_product(product_id, &shared::models::ProductUpdate::stock(new_stock))
            .await
            .map(|_| ())
            .map_err(|err| ledger_error(product_id, err))
    }
}

#[async_trait]
impl OrderLedger for StoreClient {
    async fn submit_order(&self, order: &OrderCreate) -> Result<(), LedgerError> {
        self.create_order(order).await.map(|_| ()).map_err(|err| match err {
            ClientError::Validation(msg) | ClientError::NotFound(msg) => LedgerError::Rejected(msg),
            other => LedgerError::Transport(other.to_string()),
        })
    }
}

fn ledger_error(product_id: i64, err: ClientError) -> LedgerError {
    match err {
        ClientError::NotFound(_) => LedgerError::ProductNotFound(product_id),
        ClientError::Validation(msg) => LedgerError::Rejected(msg),
        other => LedgerError::Transport(other.to_string()),
    }
}
