//! Router and HTTP handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::ui;
use crate::error::ApiResult;
use crate::models::{PaperDetails, SearchResponse};
use crate::service::{SearchContext, SearchRequest};

/// Raw query-string pairs, in request order.
type QueryPairs = Vec<(String, String)>;

/// First value of `key`, ignoring later repeats.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Query parameters for `/api/search`.
#[derive(Debug, Default)]
pub struct SearchParams {
    /// Free-text query.
    pub q: Option<String>,

    /// Legacy title-only query.
    pub title: Option<String>,
}

impl SearchParams {
    /// Collect from raw pairs; the first occurrence of each key is used.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first_value(pairs, "q"),
            title: first_value(pairs, "title"),
        }
    }

    /// `q` wins over `title` when both are present and non-blank.
    #[must_use]
    pub fn into_request(self) -> SearchRequest {
        let non_blank = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        match (non_blank(self.q), non_blank(self.title)) {
            (Some(q), _) => SearchRequest::Query(q),
            (None, Some(title)) => SearchRequest::Title(title),
            (None, None) => SearchRequest::Query(String::new()),
        }
    }
}

/// Query parameters for `/api/paper`.
#[derive(Debug, Default)]
pub struct PaperParams {
    /// Short paper identifier.
    pub id: Option<String>,
}

impl PaperParams {
    /// Collect from raw pairs; the first `id` is used.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self { id: first_value(pairs, "id") }
    }
}

/// Create the HTTP router.
pub fn create_router(ctx: SearchContext) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/paper/{id}", get(ui::index))
        .route("/health", get(health_check))
        .route("/api/search", get(handle_search))
        .route("/api/paper", get(handle_paper))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "rdf-paper-search",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handle GET /api/search
async fn handle_search(
    State(ctx): State<SearchContext>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<Json<SearchResponse>> {
    let request = SearchParams::from_pairs(&pairs).into_request();
    tracing::debug!(?request, "Handling search request");

    Ok(Json(ctx.search(&request).await?))
}

/// Handle GET /api/paper
async fn handle_paper(
    State(ctx): State<SearchContext>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<Json<PaperDetails>> {
    let params = PaperParams::from_pairs(&pairs);
    Ok(Json(ctx.paper(params.id.as_deref()).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q_preferred_over_title() {
        let params = SearchParams { q: Some("graphs".into()), title: Some("other".into()) };
        assert_eq!(params.into_request(), SearchRequest::Query("graphs".into()));
    }

    #[test]
    fn test_title_used_when_q_blank() {
        let params = SearchParams { q: Some("  ".into()), title: Some("ontologies".into()) };
        assert_eq!(params.into_request(), SearchRequest::Title("ontologies".into()));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_repeated_parameters_take_first_value() {
        let params = SearchParams::from_pairs(&pairs(&[("q", "graphs"), ("q", "other")]));
        assert_eq!(params.into_request(), SearchRequest::Query("graphs".into()));

        let params = PaperParams::from_pairs(&pairs(&[("id", "1"), ("id", "2"), ("x", "y")]));
        assert_eq!(params.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(SearchParams::default().into_request(), SearchRequest::Query(String::new()));
    }
}
