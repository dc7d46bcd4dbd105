//! Data models for SPARQL results and the JSON API.
//!
//! API models use `#[serde(rename_all = "camelCase")]` to match the
//! response shapes the UI consumes.

mod paper;
mod sparql;

pub use paper::{AuthorRef, ErrorBody, PaperDetails, SearchItem, SearchResponse};
pub use sparql::{SparqlBindings, SparqlHead, SparqlResults, SparqlRow, SparqlRowExt, SparqlValue};
