//! Paper detail lookup.

use super::SearchContext;
use crate::error::{ApiError, ApiResult};
use crate::mapper;
use crate::models::PaperDetails;
use crate::query::builder;

impl SearchContext {
    /// Fetch full details for a short paper identifier.
    pub async fn paper(&self, id: Option<&str>) -> ApiResult<PaperDetails> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::validation("Missing id"))?;

        let iri = mapper::paper_iri(id);
        let rows = self.graph.select(&builder::paper_details(&iri)).await?;

        let row = rows.first().ok_or_else(|| ApiError::not_found("Not found"))?;
        tracing::debug!(id, "Paper details resolved");

        Ok(mapper::paper_details(id, &iri, row))
    }
}
