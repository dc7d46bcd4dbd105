//! Fuzzing library for rdf-paper-search.
//!
//! This crate provides fuzzing targets for the free-text query parser,
//! SPARQL literal escaping and SPARQL JSON results decoding.
//!
//! # Usage
//!
//! ```bash
//! cd crates/query-fuzz
//! cargo +nightly fuzz run fuzz_query_parse -- -max_total_time=60
//! ```

pub use rdf_paper_search::{mapper, models, query};
