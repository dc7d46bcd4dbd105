//! Paper search: parse, cache, query with prefix-to-infix fallback, map.

use super::SearchContext;
use crate::config::search;
use crate::error::{ApiError, ApiResult, ClientResult};
use crate::mapper;
use crate::models::{SearchResponse, SparqlRow};
use crate::query::builder::{self, MatchMode};
use crate::query::parser::collapse_whitespace;
use crate::query::{SearchIntent, normalize_query, parse_query};

/// A search request as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Free-text query with `author:`/`year:`/`id:` markers (`q` parameter).
    Query(String),

    /// Plain title phrase (legacy `title` parameter).
    Title(String),
}

impl SearchRequest {
    fn text(&self) -> &str {
        match self {
            Self::Query(q) | Self::Title(q) => q.trim(),
        }
    }

    const fn max_chars(&self) -> usize {
        match self {
            Self::Query(_) => search::MAX_QUERY_CHARS,
            Self::Title(_) => search::MAX_TITLE_QUERY_CHARS,
        }
    }

    const fn mode_name(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::Title(_) => "title",
        }
    }

    fn intent(&self) -> SearchIntent {
        match self {
            Self::Query(_) => parse_query(self.text()),
            Self::Title(_) => SearchIntent::title(collapse_whitespace(self.text())),
        }
    }
}

impl SearchContext {
    /// Search papers.
    ///
    /// Inputs shorter than three characters return no items without querying;
    /// inputs over the mode's bound are rejected.
    pub async fn search(&self, request: &SearchRequest) -> ApiResult<SearchResponse> {
        let text = request.text();
        let chars = text.chars().count();

        if chars < search::MIN_QUERY_CHARS {
            return Ok(SearchResponse::empty());
        }
        if chars > request.max_chars() {
            return Err(ApiError::validation("Query too long"));
        }

        let intent = request.intent();
        if intent.is_empty()
            || (intent.is_title_only() && intent.title.chars().count() < search::MIN_QUERY_CHARS)
        {
            return Ok(SearchResponse::empty());
        }

        let key = format!(
            "{}|{}|{}",
            request.mode_name(),
            normalize_query(text),
            intent.cache_fragment()
        );
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(query = %text, cache = "hit", "Serving cached search");
            return Ok(cached);
        }

        let rows = self.run_search(request, &intent).await?;
        let response = SearchResponse { items: mapper::search_items(&rows) };

        tracing::info!(
            query = %text,
            mode = request.mode_name(),
            items = response.items.len(),
            cache = "miss",
            "Search completed"
        );

        self.cache.insert(key, response.clone());
        Ok(response)
    }

    async fn run_search(
        &self,
        request: &SearchRequest,
        intent: &SearchIntent,
    ) -> ClientResult<Vec<SparqlRow>> {
        let build = |mode: MatchMode| match request {
            SearchRequest::Title(_) => Some(builder::title_search(&intent.title, mode)),
            SearchRequest::Query(_) => builder::composite_search(intent, mode),
        };

        let Some(query) = build(MatchMode::Prefix) else {
            return Ok(Vec::new());
        };
        let rows = self.graph.select(&query).await?;

        if !rows.is_empty() || intent.title.is_empty() || intent.direct_id.is_some() {
            return Ok(rows);
        }

        tracing::debug!(
            title = %intent.title,
            mode = MatchMode::Infix.as_str(),
            "Prefix match empty, retrying"
        );
        match build(MatchMode::Infix) {
            Some(query) => self.graph.select(&query).await,
            None => Ok(rows),
        }
    }
}
