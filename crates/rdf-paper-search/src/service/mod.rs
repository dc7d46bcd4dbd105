//! Request orchestration shared by the HTTP handlers.
//!
//! Each operation:
//! 1. Validates its input
//! 2. Consults the response cache (search only)
//! 3. Builds and runs SPARQL queries through the [`GraphStore`]
//! 4. Maps result rows to API models

mod paper;
mod search;

pub use search::SearchRequest;

use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::client::GraphStore;
use crate::config::Config;
use crate::models::SearchResponse;

/// Shared state for search and detail lookups.
#[derive(Clone)]
pub struct SearchContext {
    /// Graph store the queries run against.
    pub graph: Arc<dyn GraphStore>,

    /// Cache of search payloads.
    pub cache: Arc<ResponseCache<SearchResponse>>,
}

impl SearchContext {
    /// Create a context with an explicit cache.
    #[must_use]
    pub fn new(graph: Arc<dyn GraphStore>, cache: Arc<ResponseCache<SearchResponse>>) -> Self {
        Self { graph, cache }
    }

    /// Create a context with a system-clock cache sized from the configuration.
    #[must_use]
    pub fn from_config(graph: Arc<dyn GraphStore>, config: &Config) -> Self {
        let cache = ResponseCache::new(config.cache_ttl, config.cache_max_entries);
        Self::new(graph, Arc::new(cache))
    }
}

impl std::fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchContext").field("cache", &self.cache).finish_non_exhaustive()
    }
}
