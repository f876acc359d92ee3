//! POS Terminal Core
//!
//! Cart state, stock reservation, and checkout against an authoritative
//! remote inventory:
//!
//! - **cart**: ordered cart lines, one per product
//! - **session**: the reservation protocol (ledger write before local mutation)
//! - **checkout**: order assembly and receipt numbers
//! - **money**: decimal totals and payment arithmetic
//! - **ledger**: async traits over the inventory backend
//! - **memory**: in-process ledger for tests and offline demos
//!
//! # Data Flow
//!
//! ```text
//! UI event → PosSession ─── write ───▶ StockLedger (backend)
//!                │                          │
//!                └── mutate cart ◀── confirmed
//!                         │
//!                      totals() → render
//! ```
//!
//! The ledger holds the truth for stock; the cart holds reservations. At
//! every quiescent point, remote stock plus reserved quantity equals the
//! stock an empty cart would see.

pub mod cart;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod memory;
pub mod money;
pub mod session;

// Re-exports
pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutReceipt, OrderIdSeq};
pub use error::{SessionError, SessionResult};
pub use ledger::{LedgerError, OrderLedger, StockLedger};
pub use memory::MemoryStore;
pub use money::Totals;
pub use session::{ClearReport, PosSession, RestoreFailure};
