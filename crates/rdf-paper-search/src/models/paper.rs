//! Paper models returned by the JSON API.

use serde::{Deserialize, Serialize};

/// An author reference attached to a search item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Short person identifier (hash or university id), or the full IRI.
    pub id: String,

    /// Person IRI.
    pub iri: String,
}

/// One matched paper in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    /// Short paper identifier.
    pub id: String,

    /// Paper IRI.
    pub iri: String,

    /// Paper title, empty when the graph has none.
    pub title: String,

    /// Publication date as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Author display names joined with ", ".
    pub authors_text: String,

    /// Author references.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
}

/// Search endpoint payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matched papers, ordered by title.
    pub items: Vec<SearchItem>,
}

impl SearchResponse {
    /// An empty response.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Full details of a single paper.
///
/// Absent scalar fields serialize as `null`; multi-valued fields are always arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDetails {
    pub id: String,
    pub iri: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub year: Option<String>,
    pub r#abstract: Option<String>,
    pub keywords: Vec<String>,
    pub same_as: Vec<String>,
    pub urls: Vec<String>,
    pub is_part_of: Vec<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub page_start: Option<String>,
    pub page_end: Option<String>,
    pub number_of_pages: Option<String>,
    pub access_rights: Option<String>,
    pub licenses: Vec<String>,
    pub publisher_iris: Vec<String>,
    pub publisher_names: Vec<String>,

    /// Author display names.
    pub authors: Vec<String>,

    /// Editor display names.
    pub editors: Vec<String>,
}

/// Error payload for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_item_omits_missing_year() {
        let item = SearchItem {
            id: "42".to_string(),
            iri: "https://dice-research.org/id/publication/ris/42".to_string(),
            title: "Linked Data".to_string(),
            year: None,
            authors_text: String::new(),
            authors: vec![],
        };

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("year").is_none());
        assert_eq!(value["authorsText"], "");
        assert_eq!(value["authors"], json!([]));
    }

    #[test]
    fn test_paper_details_renders_nulls_and_arrays() {
        let details = PaperDetails {
            id: "7".to_string(),
            iri: "https://dice-research.org/id/publication/ris/7".to_string(),
            title: "A Paper".to_string(),
            ..PaperDetails::default()
        };

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["type"], serde_json::Value::Null);
        assert_eq!(value["abstract"], serde_json::Value::Null);
        assert_eq!(value["numberOfPages"], serde_json::Value::Null);
        assert_eq!(value["sameAs"], json!([]));
        assert_eq!(value["isPartOf"], json!([]));
        assert_eq!(value["publisherNames"], json!([]));
    }
}
