//! Free-text query parsing and SPARQL query construction.
//!
//! The parser turns raw search input into a [`SearchIntent`]; the builder
//! renders intents into SPARQL SELECT queries against the schema.org
//! vocabulary of the publication graph.

pub mod builder;
pub mod parser;

pub use builder::{MatchMode, escape_literal};
pub use parser::{SearchIntent, normalize_query, parse_query};
