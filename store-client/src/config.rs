//! Client configuration

/// Client configuration for connecting to the inventory backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:5000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read configuration from the environment
    ///
    /// `STORE_API_URL` and `STORE_API_TIMEOUT_SECS`, both optional.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STORE_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".into()),
            timeout: std::env::var("STORE_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a client from this configuration
    pub fn build_client(&self) -> super::StoreClient {
        super::StoreClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api")
    }
}
