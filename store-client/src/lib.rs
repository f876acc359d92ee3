//! Store Client - HTTP client for the inventory backend
//!
//! Typed access to the backend REST API: catalog reads, stock writes,
//! order submission, and the dashboard summary.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::StoreClient;

// Re-export shared types for convenience
pub use shared::response::{ApiMessage, DashboardSummary};
