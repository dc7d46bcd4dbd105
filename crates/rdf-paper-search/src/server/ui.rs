//! Embedded single-page search UI.

use axum::response::Html;

/// Page markup, compiled into the binary.
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the UI. Client-side code reads the paper id from the location.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
