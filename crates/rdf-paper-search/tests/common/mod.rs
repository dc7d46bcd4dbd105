//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::MockServer;

use rdf_paper_search::cache::{ManualClock, ResponseCache};
use rdf_paper_search::config::Config;
use rdf_paper_search::server::routes::create_router;
use rdf_paper_search::{SearchContext, SparqlClient};

pub const PAPER_BASE: &str = "https://dice-research.org/id/publication/ris/";

/// Build a router backed by the mock endpoint, with a manual cache clock.
pub fn router_for(mock_server: &MockServer) -> (Router, Arc<ManualClock>) {
    let config = Config::for_testing(&mock_server.uri());
    let client = SparqlClient::new(&config).unwrap();
    let clock = Arc::new(ManualClock::new());
    let cache = ResponseCache::with_clock(Duration::from_secs(60), 300, clock.clone());
    let ctx = SearchContext::new(Arc::new(client), Arc::new(cache));
    (create_router(ctx), clock)
}

/// Issue a GET and return status and parsed JSON body.
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Matches POSTed SPARQL queries containing `needle`.
pub fn query_contains(needle: &'static str) -> impl Fn(&wiremock::Request) -> bool + Send + Sync {
    move |req| {
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(&req.body)
            .ok()
            .and_then(|pairs| pairs.into_iter().find(|(k, _)| k == "query"))
            .is_some_and(|(_, q)| q.contains(needle))
    }
}

/// A SPARQL JSON results document.
pub fn sparql_results(vars: &[&str], bindings: Vec<Value>) -> Value {
    json!({
        "head": {"vars": vars},
        "results": {"bindings": bindings}
    })
}

/// A search row binding.
pub fn search_binding(
    id: &str,
    title: &str,
    year: Option<&str>,
    authors: &[(&str, &str)],
) -> Value {
    let mut binding = json!({
        "paper": {"type": "uri", "value": format!("{PAPER_BASE}{id}")},
        "title": {"type": "literal", "value": title},
        "authorNames": {
            "type": "literal",
            "value": authors.iter().map(|(_, n)| *n).collect::<Vec<_>>().join("; ")
        },
        "authorIris": {
            "type": "literal",
            "value": authors.iter().map(|(iri, _)| *iri).collect::<Vec<_>>().join("|")
        }
    });
    if let Some(year) = year {
        binding["year"] = json!({"type": "literal", "value": year});
    }
    binding
}

/// A search results document.
pub fn search_results(bindings: Vec<Value>) -> Value {
    sparql_results(&["paper", "title", "year", "authorNames", "authorIris"], bindings)
}
