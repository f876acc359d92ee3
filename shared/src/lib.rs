//! Shared types for the storefront POS workspace
//!
//! Wire-level data models for the inventory backend API, response
//! structures, sale settings, and small utility helpers used by both the
//! API client and the terminal core.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use util::now_millis;
