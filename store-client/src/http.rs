//! HTTP client for the inventory REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Category, Customer, Order, OrderCreate, Product, ProductUpdate};
use shared::response::{ApiMessage, DashboardSummary};

/// HTTP client for making requests to the inventory backend
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let detail = error_detail(&text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(detail)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(detail)),
                _ => Err(ClientError::Internal(detail)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Products API ==========

    /// List the full catalog
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    /// Fetch one product, including its current stock level
    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("products/{}", id)).await
    }

    /// Apply a partial update to a product
    ///
    /// Only the fields present in `update` are written; see
    /// [`ProductUpdate::stock`] for the stock-only write.
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> ClientResult<ApiMessage> {
        tracing::debug!(product_id = id, "updating product");
        self.put(&format!("products/{}", id), update).await
    }

    // ========== Orders API ==========

    /// Submit a completed sale
    ///
    /// The backend acknowledges with a message only; it does not echo the
    /// stored row.
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<ApiMessage> {
        tracing::debug!(order_id = %order.order_id, total = order.total, "submitting order");
        self.post("orders", order).await
    }

    /// List all orders
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("orders").await
    }

    // ========== Catalog API ==========

    /// List all categories
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("categories").await
    }

    /// List all customers
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.get("customers").await
    }

    /// Fetch the dashboard summary figures
    pub async fn dashboard(&self) -> ClientResult<DashboardSummary> {
        self.get("dashboard").await
    }
}

/// Extract the message from a `{"error": ...}` or `{"message": ...}` body
///
/// The backend mixes both shapes; plain-text bodies pass through as-is.
fn error_detail(text: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .unwrap_or_else(|| text.to_string())
}
