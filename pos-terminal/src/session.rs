//! POS session: the reservation protocol and checkout orchestration
//!
//! State machine per product line:
//!
//! ```text
//!             add_to_cart                update_line_quantity
//!   absent ───────────────▶ reserved(q) ◀──────────────────▶ reserved(q')
//!      ▲                        │
//!      │   remove_line /        │
//!      │   clear_cart           │ checkout
//!      └────────────────────────┤
//!        (stock restored)       ▼
//!                             sold (stock not restored)
//! ```
//!
//! Every mutating operation writes the ledger first and touches local
//! state only after the write confirms, so a crash or failure between the
//! two steps can only strand stock as reserved, never oversell it.
//!
//! Operations take `&mut self`: one session can never interleave two of
//! its own ledger writes. To share a session across tasks, wrap it in
//! `Arc<tokio::sync::Mutex<PosSession<_>>>` and hold the guard across the
//! whole call, which is the async equivalent of disabling the buttons
//! while a request is in flight.

use crate::cart::{Cart, CartLine};
use crate::checkout::{CheckoutReceipt, OrderIdSeq};
use crate::error::{SessionError, SessionResult};
use crate::ledger::{LedgerError, OrderLedger, StockLedger};
use crate::money::{self, Totals};
use shared::models::{OrderCreate, OrderStatus, Product, SaleSettings, WALK_IN_CUSTOMER};

/// One failed stock restoration from [`PosSession::clear_cart`]
#[derive(Debug)]
pub struct RestoreFailure {
    pub product_id: i64,
    pub name: String,
    /// Units still deducted on the ledger with no cart line holding them
    pub quantity: i32,
    pub error: LedgerError,
}

/// Outcome of a cart clear
///
/// The cart is always cleared locally; `failures` lists the lines whose
/// stock restoration did not confirm and still needs reconciliation.
#[derive(Debug)]
pub struct ClearReport {
    /// Lines in the cart when the clear started
    pub cleared_lines: usize,
    pub failures: Vec<RestoreFailure>,
}

impl ClearReport {
    /// True when every reservation went back to the ledger
    pub fn fully_restored(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A point-of-sale cart session against an authoritative stock ledger
///
/// Generic over the ledger so tests and offline demos run against
/// [`MemoryStore`](crate::memory::MemoryStore) while production uses
/// [`StoreClient`](store_client::StoreClient).
#[derive(Debug)]
pub struct PosSession<L> {
    ledger: L,
    cart: Cart,
    settings: SaleSettings,
    order_ids: OrderIdSeq,
    tendered: f64,
    customer: Option<String>,
}

impl<L> PosSession<L> {
    /// Create a session with default settings
    pub fn new(ledger: L) -> Self {
        Self::with_settings(ledger, SaleSettings::default())
    }

    pub fn with_settings(ledger: L, settings: SaleSettings) -> Self {
        Self {
            ledger,
            cart: Cart::new(),
            settings,
            order_ids: OrderIdSeq::new(),
            tendered: 0.0,
            customer: None,
        }
    }

    /// Read access to the cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn settings(&self) -> &SaleSettings {
        &self.settings
    }

    /// Replace the sale settings (pushed by the settings screen)
    pub fn set_settings(&mut self, settings: SaleSettings) {
        self.settings = settings;
    }

    /// Record the tendered amount as the cashier types it
    pub fn set_tendered(&mut self, amount: f64) {
        self.tendered = amount;
    }

    pub fn tendered(&self) -> f64 {
        self.tendered
    }

    /// Name the customer for the next checkout (walk-in when unset)
    pub fn set_customer(&mut self, name: impl Into<String>) {
        self.customer = Some(name.into());
    }

    /// Current totals against the tendered amount; pure, no ledger access
    pub fn totals(&self) -> Totals {
        money::calculate_totals(self.cart.lines(), &self.settings, self.tendered)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl<L: StockLedger> PosSession<L> {
    /// Reserve one unit of a product into the cart
    ///
    /// Writes `stock - 1` to the ledger first; the line is created or
    /// incremented only after the write confirms.
    pub async fn add_to_cart(&mut self, product_id: i64) -> SessionResult<()> {
        // 1. Authoritative read
        let product = self.fetch(product_id).await?;

        // 2. Availability check
        if product.stock <= 0 {
            return Err(SessionError::OutOfStock {
                product_id,
                name: product.name,
            });
        }

        // 3. Reserve on the ledger before touching the cart
        self.write_stock(product_id, product.stock - 1).await?;

        // 4. Create or increment the line
        self.cart.add_one(product_id, &product.name, product.price);
        tracing::info!(product_id, name = %product.name, "added to cart");
        Ok(())
    }

    /// Set a line to an absolute quantity
    ///
    /// Only the delta against the current quantity moves on the ledger;
    /// reducing to zero is [`remove_line`](Self::remove_line), not an
    /// update.
    pub async fn update_line_quantity(&mut self, index: usize, new_qty: i32) -> SessionResult<()> {
        // 1. Resolve the line
        let line = self
            .cart
            .line(index)
            .ok_or(SessionError::LineNotFound(index))?
            .clone();

        // 2. Quantity floor
        if new_qty < 1 {
            return Err(SessionError::InvalidQuantity(new_qty));
        }

        let delta = new_qty - line.quantity;
        if delta == 0 {
            return Ok(());
        }

        // 3. Fresh availability; increases need the delta in stock
        let product = self.fetch(line.product_id).await?;
        if delta > 0 && delta > product.stock {
            return Err(SessionError::InsufficientStock {
                product_id: line.product_id,
                name: line.name,
                requested: delta,
                available: product.stock,
            });
        }

        // 4. One write covers both directions
        self.write_stock(line.product_id, product.stock - delta)
            .await?;

        // 5. Commit locally
        self.cart.set_quantity(index, new_qty);
        tracing::info!(product_id = line.product_id, new_qty, delta, "quantity updated");
        Ok(())
    }

    /// Remove a line, returning its full reservation to the ledger
    ///
    /// Fails only on a ledger failure, in which case the line stays in the
    /// cart, still reserved.
    pub async fn remove_line(&mut self, index: usize) -> SessionResult<CartLine> {
        let line = self
            .cart
            .line(index)
            .ok_or(SessionError::LineNotFound(index))?
            .clone();

        let product = self.fetch(line.product_id).await?;
        self.write_stock(line.product_id, product.stock + line.quantity)
            .await?;

        let removed = self.cart.remove(index);
        tracing::info!(
            product_id = removed.product_id,
            quantity = removed.quantity,
            "line removed"
        );
        Ok(removed)
    }

    /// Void the cart, returning every reservation to the ledger
    ///
    /// Restorations run line by line and never short-circuit; the cart is
    /// cleared and the tendered amount reset regardless. Failures come
    /// back in the report for reconciliation instead of being raised,
    /// since there is no cross-product transaction to roll back to.
    pub async fn clear_cart(&mut self) -> ClearReport {
        let lines = self.cart.lines().to_vec();
        let mut failures = Vec::new();

        for line in &lines {
            if let Err(error) = self.restore_line(line).await {
                tracing::warn!(
                    product_id = line.product_id,
                    quantity = line.quantity,
                    %error,
                    "stock restoration failed during cart clear"
                );
                failures.push(RestoreFailure {
                    product_id: line.product_id,
                    name: line.name.clone(),
                    quantity: line.quantity,
                    error,
                });
            }
        }

        self.cart.clear();
        self.tendered = 0.0;

        ClearReport {
            cleared_lines: lines.len(),
            failures,
        }
    }

    /// Return one line's reservation (read + write, no local mutation)
    async fn restore_line(&self, line: &CartLine) -> Result<(), LedgerError> {
        let product = self.ledger.fetch_product(line.product_id).await?;
        self.ledger
            .write_stock(line.product_id, product.stock + line.quantity)
            .await
    }

    async fn fetch(&self, product_id: i64) -> SessionResult<Product> {
        self.ledger
            .fetch_product(product_id)
            .await
            .map_err(|err| match err {
                LedgerError::ProductNotFound(id) => SessionError::ProductNotFound(id),
                other => SessionError::LedgerWrite {
                    product_id,
                    source: other,
                },
            })
    }

    async fn write_stock(&self, product_id: i64, new_stock: i32) -> SessionResult<()> {
        self.ledger
            .write_stock(product_id, new_stock)
            .await
            .map_err(|err| SessionError::LedgerWrite {
                product_id,
                source: err,
            })
    }
}

impl<L: StockLedger + OrderLedger> PosSession<L> {
    /// Settle the cart as a completed sale
    ///
    /// Validation and submission failures leave the cart, its reservations
    /// and the tendered amount untouched; a retry is safe and gets a fresh
    /// receipt number. On success the cart empties without restoring
    /// stock: the reservation has become a sale.
    pub async fn checkout(
        &mut self,
        amount_paid: f64,
        payment_method: &str,
    ) -> SessionResult<CheckoutReceipt> {
        // 1. Nothing to sell
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        // 2. Payment must cover the total (one-cent tolerance)
        let totals = money::calculate_totals(self.cart.lines(), &self.settings, amount_paid);
        if !money::is_payment_sufficient(amount_paid, totals.total) {
            return Err(SessionError::InsufficientPayment {
                paid: amount_paid,
                required: totals.total,
            });
        }

        // 3. Assemble the order
        let order = OrderCreate {
            order_id: self.order_ids.next_id(),
            customer: self
                .customer
                .clone()
                .unwrap_or_else(|| WALK_IN_CUSTOMER.to_string()),
            items: self.cart.item_count(),
            total: totals.total,
            payment: payment_method.to_string(),
            status: OrderStatus::Completed,
        };

        // 4. Submit; reservations stay intact on failure
        self.ledger
            .submit_order(&order)
            .await
            .map_err(SessionError::OrderSubmission)?;

        // 5. The reservation is now a sale: empty the cart without restoring
        self.cart.clear();
        self.tendered = 0.0;
        self.customer = None;

        tracing::info!(
            order_id = %order.order_id,
            total = order.total,
            change = totals.change,
            "checkout settled"
        );

        Ok(CheckoutReceipt { order, totals })
    }
}
