//! Client configuration

use crate::{ClientError, ClientResult, HttpClient};

const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Client configuration for connecting to the catalog backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: None,
        }
    }

    /// Read `XORIG_API_BASE`, `XORIG_TIMEOUT_SECS` and `XORIG_API_TOKEN`
    ///
    /// A `.env` file in the working directory is honored.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();

        let mut config =
            Self::new(std::env::var("XORIG_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.into()));
        if let Ok(raw) = std::env::var("XORIG_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("XORIG_TIMEOUT_SECS is not a number: {}", raw)))?;
            config = config.with_timeout(secs);
        }
        if let Ok(token) = std::env::var("XORIG_API_TOKEN")
            && !token.is_empty()
        {
            config = config.with_token(token);
        }
        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://catalog.internal:8080")
            .with_token("secret")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://catalog.internal:8080");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Some(5));
    }

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.token.is_none());
        assert_eq!(config.timeout, None);
    }
}
