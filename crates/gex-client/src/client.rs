//! HTTP client for the GEX Levels API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the GEX Levels API.
#[derive(Debug, Clone)]
pub struct GexClient {
    client: Client,
    base_url: String,
}

impl GexClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if Url::parse(&base_url)?.cannot_be_a_base() {
            return Err(Error::InvalidRequest(format!(
                "Base URL cannot hold a path: {}",
                base_url
            )));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Levels
    // ========================================================================

    /// Generates levels from explicit inputs.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the inputs.
    pub async fn generate_levels(
        &self,
        request: &GenerateLevelsRequest,
    ) -> Result<LevelsResponse, Error> {
        let url = format!("{}/api/v1/gex/levels", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Generates levels from the stored anchors of a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails or the symbol is unknown.
    pub async fn get_symbol_levels(
        &self,
        symbol: &str,
        query: &LevelsQuery,
    ) -> Result<LevelsResponse, Error> {
        let url = self.symbol_url(symbol, Some("levels"), query)?;
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Summarizes the levels of a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails or the symbol is unknown.
    pub async fn get_symbol_summary(
        &self,
        symbol: &str,
        query: &LevelsQuery,
    ) -> Result<SummaryResponse, Error> {
        let url = self.symbol_url(symbol, Some("summary"), query)?;
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Symbols
    // ========================================================================

    /// Lists registered symbols.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_symbols(&self) -> Result<SymbolsListResponse, Error> {
        let url = format!("{}/api/v1/gex/symbols", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets the stored anchors of a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails or the symbol is unknown.
    pub async fn get_symbol(&self, symbol: &str) -> Result<SymbolSnapshot, Error> {
        let url = self.symbol_url(symbol, None, &LevelsQuery::default())?;
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Creates or replaces the anchors of a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails or the symbol is rejected.
    pub async fn upsert_symbol(
        &self,
        symbol: &str,
        request: &UpsertSymbolRequest,
    ) -> Result<SymbolSnapshot, Error> {
        let url = self.symbol_url(symbol, None, &LevelsQuery::default())?;
        let resp = self.client.put(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Deletes a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails or the symbol is unknown.
    pub async fn delete_symbol(&self, symbol: &str) -> Result<DeleteSymbolResponse, Error> {
        let url = self.symbol_url(symbol, None, &LevelsQuery::default())?;
        let resp = self.client.delete(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Builds `/api/v1/gex/symbols/{symbol}[/{action}]` with an optional query
    /// string. The symbol is percent-encoded as a single path segment.
    fn symbol_url(
        &self,
        symbol: &str,
        action: Option<&str>,
        query: &LevelsQuery,
    ) -> Result<String, Error> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(Error::InvalidRequest("Symbol cannot be empty".to_string()));
        }

        let mut url = Url::parse(&self.base_url)?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                Error::InvalidRequest(format!("Base URL cannot hold a path: {}", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(["api", "v1", "gex", "symbols", symbol]);
            if let Some(action) = action {
                segments.push(action);
            }
        }

        let qs = serde_urlencoded::to_string(query)?;
        if !qs.is_empty() {
            url.set_query(Some(&qs));
        }
        Ok(url.to_string())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
