//! RDF Paper Search
//!
//! A small web service for searching a SPARQL-backed knowledge graph of
//! scholarly papers by free text and viewing structured paper details.
//!
//! # Features
//!
//! - **Free-text queries**: `author:`, `year:` and `id:` markers, bare years and identifiers
//! - **Prefix-then-infix matching**: title prefix search falls back to substring search
//! - **Cached**: 60-second TTL cache of search payloads
//! - **Single page UI**: debounced search box with expandable results
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rdf_paper_search::{Config, SearchContext, SearchRequest, SparqlClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = SparqlClient::new(&config)?;
//!     let ctx = SearchContext::from_config(Arc::new(client), &config);
//!
//!     let response = ctx.search(&SearchRequest::Query("author: Lehmann year:2015".into())).await?;
//!     println!("{} papers", response.items.len());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod query;
pub mod server;
pub mod service;

pub use client::{GraphStore, SparqlClient};
pub use config::Config;
pub use error::{ApiError, ClientError};
pub use service::{SearchContext, SearchRequest};
