//! Configuration for the paper search server.

use std::time::Duration;

/// Environment variable naming the SPARQL endpoint.
pub const ENDPOINT_ENV: &str = "SPARQL_ENDPOINT";

/// Search behaviour constants.
pub mod search {
    use std::time::Duration;

    /// Cached search payloads older than this are treated as absent.
    pub const CACHE_TTL: Duration = Duration::from_secs(60);

    /// The cache is wiped wholesale once it holds more than this many entries.
    pub const CACHE_MAX_ENTRIES: usize = 300;

    /// Queries shorter than this return no items without contacting the endpoint.
    pub const MIN_QUERY_CHARS: usize = 3;

    /// Upper bound for the free-text `q` parameter.
    pub const MAX_QUERY_CHARS: usize = 300;

    /// Upper bound for the legacy `title` parameter.
    pub const MAX_TITLE_QUERY_CHARS: usize = 120;

    /// Row cap for search queries.
    pub const SEARCH_LIMIT: usize = 25;

    /// Row cap for direct and detail lookups.
    pub const DETAIL_LIMIT: usize = 1;

    /// How much of an endpoint error body is surfaced.
    pub const ERROR_BODY_PREVIEW: usize = 500;
}

/// Identifier namespaces of the knowledge graph.
///
/// These are literal strings the dataset depends on; they are not configurable.
pub mod namespace {
    /// Base IRI of every paper subject.
    pub const PAPER_BASE: &str = "https://dice-research.org/id/publication/ris/";

    /// Path marker preceding a paper's short identifier.
    pub const PAPER_MARKER: &str = "/ris/";

    /// Path markers preceding a person's short identifier, in lookup order.
    pub const PERSON_MARKERS: &[&str] = &["/hash/", "/uni/"];
}

/// HTTP client and server constants.
pub mod http {
    use std::time::Duration;

    /// Connection timeout for the SPARQL endpoint.
    ///
    /// No overall request timeout is applied.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default listen port.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Result format requested from the endpoint.
    pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SPARQL endpoint URL.
    pub endpoint: String,

    /// Connection timeout for the endpoint.
    pub connect_timeout: Duration,

    /// Search cache TTL.
    pub cache_ttl: Duration,

    /// Entry count above which the cache is cleared.
    pub cache_max_entries: usize,
}

impl Config {
    /// Create a configuration for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is not an absolute URL.
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let endpoint = endpoint.into();
        let parsed = url::Url::parse(endpoint.trim())
            .map_err(|e| anyhow::anyhow!("Invalid {ENDPOINT_ENV} '{endpoint}': {e}"))?;

        Ok(Self {
            endpoint: parsed.to_string(),
            connect_timeout: http::CONNECT_TIMEOUT,
            cache_ttl: search::CACHE_TTL,
            cache_max_entries: search::CACHE_MAX_ENTRIES,
        })
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/sparql", base_url.trim_end_matches('/')),
            connect_timeout: Duration::from_secs(2),
            cache_ttl: search::CACHE_TTL,
            cache_max_entries: search::CACHE_MAX_ENTRIES,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `SPARQL_ENDPOINT` is missing or not a URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing env var: {ENDPOINT_ENV}"))?;
        Self::new(endpoint)
    }
}
