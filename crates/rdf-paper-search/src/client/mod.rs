//! SPARQL endpoint client.
//!
//! Provides an async HTTP client that:
//! - POSTs form-encoded SELECT queries to the configured endpoint
//! - Requests `application/sparql-results+json`
//! - Makes a single attempt per query, with no retry and no response caching

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::config::{Config, http, search};
use crate::error::{ClientError, ClientResult};
use crate::models::{SparqlResults, SparqlRow};

/// Executes SELECT queries against a graph store.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Run a SELECT query and return its solutions.
    async fn select(&self, query: &str) -> ClientResult<Vec<SparqlRow>>;
}

/// HTTP client for a SPARQL 1.1 protocol endpoint.
#[derive(Clone)]
pub struct SparqlClient {
    /// HTTP client.
    client: Client,

    /// Endpoint URL.
    endpoint: String,
}

impl SparqlClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(http::SPARQL_RESULTS_JSON));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    /// Endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check the response status, surfacing the leading part of the body on failure.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::endpoint(status.as_u16(), &text, search::ERROR_BODY_PREVIEW))
    }
}

#[async_trait]
impl GraphStore for SparqlClient {
    async fn select(&self, query: &str) -> ClientResult<Vec<SparqlRow>> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("query", query)
            .finish();

        tracing::debug!(endpoint = %self.endpoint, bytes = query.len(), "Sending SPARQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded; charset=UTF-8")
            .body(body)
            .send()
            .await?;

        let response = Self::handle_response(response).await?;
        let bytes = response.bytes().await?;
        let rows = serde_json::from_slice::<SparqlResults>(&bytes)?.into_rows();

        tracing::debug!(rows = rows.len(), "SPARQL query completed");
        Ok(rows)
    }
}

impl std::fmt::Debug for SparqlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparqlClient").field("endpoint", &self.endpoint).finish()
    }
}
