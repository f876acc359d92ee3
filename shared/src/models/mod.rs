//! Data models
//!
//! Shared between the POS terminal and the inventory backend (via API).
//! All IDs are `i64` (backend INTEGER PRIMARY KEY).

pub mod category;
pub mod customer;
pub mod order;
pub mod product;
pub mod settings;

// Re-exports
pub use category::*;
pub use customer::*;
pub use order::*;
pub use product::*;
pub use settings::*;
