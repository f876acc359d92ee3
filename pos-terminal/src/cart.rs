//! Cart state
//!
//! One line per distinct product, in insertion order. The cart itself is
//! plain data; all ledger coordination lives in
//! [`PosSession`](crate::session::PosSession), which is why the mutating
//! methods are crate-private.

use serde::Serialize;

/// A reserved cart line
///
/// `name` and `price` are snapshots taken when the product is first added;
/// later catalog edits do not reprice lines already in the cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    /// Unit price in currency unit
    pub price: f64,
    pub quantity: i32,
}

/// Ordered cart lines, one per product
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Units reserved for one product (0 when absent)
    pub fn reserved_for(&self, product_id: i64) -> i32 {
        self.position(product_id)
            .map(|index| self.lines[index].quantity)
            .unwrap_or(0)
    }

    pub fn line(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    /// Line index for a product id
    pub fn position(&self, product_id: i64) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id == product_id)
    }

    /// Add one unit, creating the line on first add
    pub(crate) fn add_one(&mut self, product_id: i64, name: &str, price: f64) {
        match self.position(product_id) {
            Some(index) => self.lines[index].quantity += 1,
            None => self.lines.push(CartLine {
                product_id,
                name: name.to_string(),
                price,
                quantity: 1,
            }),
        }
    }

    pub(crate) fn set_quantity(&mut self, index: usize, quantity: i32) {
        self.lines[index].quantity = quantity;
    }

    pub(crate) fn remove(&mut self, index: usize) -> CartLine {
        self.lines.remove(index)
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
