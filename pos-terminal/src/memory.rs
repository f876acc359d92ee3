//! In-memory ledger for tests and offline demos

use crate::ledger::{LedgerError, OrderLedger, StockLedger};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Order, OrderCreate, Product};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// In-process stand-in for the inventory backend
///
/// Implements the same ledger traits as the HTTP client and adds failure
/// injection so partial-failure paths can be exercised deterministically.
/// Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    products: RwLock<HashMap<i64, Product>>,
    orders: RwLock<Vec<Order>>,
    /// Product ids whose stock writes currently fail
    failing_writes: RwLock<HashSet<i64>>,
    reject_orders: RwLock<bool>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let products = self.inner.products.read().len();
        let orders = self.inner.orders.read().len();
        f.debug_struct("MemoryStore")
            .field("products", &products)
            .field("orders", &orders)
            .finish()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product, replacing any previous record with the same id
    pub fn seed_product(&self, product: Product) {
        self.inner.products.write().insert(product.id, product);
    }

    /// Current stock level for a product
    pub fn stock(&self, product_id: i64) -> Option<i32> {
        self.inner.products.read().get(&product_id).map(|p| p.stock)
    }

    /// Submitted orders, oldest first
    pub fn orders(&self) -> Vec<Order> {
        self.inner.orders.read().clone()
    }

    pub fn order_count(&self) -> usize {
        self.inner.orders.read().len()
    }

    /// Make stock writes for one product fail until cleared
    pub fn fail_writes_for(&self, product_id: i64) {
        self.inner.failing_writes.write().insert(product_id);
    }

    pub fn clear_write_failures(&self) {
        self.inner.failing_writes.write().clear();
    }

    /// Reject order submissions while set
    pub fn reject_orders(&self, reject: bool) {
        *self.inner.reject_orders.write() = reject;
    }
}

#[async_trait]
impl StockLedger for MemoryStore {
    async fn fetch_product(&self, product_id: i64) -> Result<Product, LedgerError> {
        self.inner
            .products
            .read()
            .get(&product_id)
            .cloned()
            .ok_or(LedgerError::ProductNotFound(product_id))
    }

    async fn write_stock(&self, product_id: i64, new_stock: i32) -> Result<(), LedgerError> {
        if self.inner.failing_writes.read().contains(&product_id) {
            return Err(LedgerError::Transport("injected write failure".to_string()));
        }
        let mut products = self.inner.products.write();
        let product = products
            .get_mut(&product_id)
            .ok_or(LedgerError::ProductNotFound(product_id))?;
        product.stock = new_stock;
        Ok(())
    }
}

#[async_trait]
impl OrderLedger for MemoryStore {
    async fn submit_order(&self, order: &OrderCreate) -> Result<(), LedgerError> {
        if *self.inner.reject_orders.read() {
            return Err(LedgerError::Transport(
                "injected order submission failure".to_string(),
            ));
        }
        let mut orders = self.inner.orders.write();
        let id = orders.len() as i64 + 1;
        orders.push(Order {
            id: Some(id),
            order_id: order.order_id.clone(),
            date: None,
            customer: order.customer.clone(),
            items: order.items,
            total: order.total,
            payment: order.payment.clone(),
            status: order.status.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(id: i64, stock: i32) -> Product {
        Product {
            id,
            code: format!("P{:03}", id),
            name: "Widget".to_string(),
            category: "General".to_string(),
            price: 10.0,
            cost: 5.0,
            stock,
            image: String::new(),
            desc: None,
            status: "Active".to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_and_write_round_trip() {
        let store = MemoryStore::new();
        store.seed_product(widget(1, 5));

        let product = store.fetch_product(1).await.unwrap();
        assert_eq!(product.stock, 5);

        store.write_stock(1, 4).await.unwrap();
        assert_eq!(store.stock(1), Some(4));
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let store = MemoryStore::new();

        let result = store.fetch_product(9).await;
        assert!(matches!(result, Err(LedgerError::ProductNotFound(9))));

        let result = store.write_stock(9, 1).await;
        assert!(matches!(result, Err(LedgerError::ProductNotFound(9))));
    }

    #[tokio::test]
    async fn injected_write_failure_leaves_stock_unchanged() {
        let store = MemoryStore::new();
        store.seed_product(widget(1, 5));
        store.fail_writes_for(1);

        let result = store.write_stock(1, 0).await;
        assert!(matches!(result, Err(LedgerError::Transport(_))));
        assert_eq!(store.stock(1), Some(5));

        store.clear_write_failures();
        store.write_stock(1, 0).await.unwrap();
        assert_eq!(store.stock(1), Some(0));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.seed_product(widget(1, 3));

        alias.write_stock(1, 2).await.unwrap();
        assert_eq!(store.stock(1), Some(2));
    }
}
