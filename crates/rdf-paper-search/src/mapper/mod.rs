//! Mapping of SPARQL result rows to API models.

mod identifiers;
mod names;

pub use identifiers::{paper_id, paper_iri, person_id};
pub use names::to_display_name;

use crate::models::{AuthorRef, PaperDetails, SearchItem, SparqlRow, SparqlRowExt};
use crate::query::builder::{IRI_SEPARATOR, NAME_SEPARATOR};

/// Split an aggregated value on `sep`, trimming pieces and dropping empty ones.
#[must_use]
pub fn split_multi(value: &str, sep: char) -> Vec<String> {
    value.split(sep).map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

fn split_row(row: &SparqlRow, var: &str, sep: char) -> Vec<String> {
    row.text(var).map(|v| split_multi(v, sep)).unwrap_or_default()
}

fn display_names(row: &SparqlRow, var: &str) -> Vec<String> {
    split_row(row, var, NAME_SEPARATOR).iter().map(|n| to_display_name(n)).collect()
}

fn scalar(row: &SparqlRow, var: &str) -> Option<String> {
    row.text(var).map(String::from)
}

/// Map one search row. Rows without a subject IRI yield `None`.
#[must_use]
pub fn search_item(row: &SparqlRow) -> Option<SearchItem> {
    let iri = row.non_empty("paper")?.to_string();

    let authors = split_row(row, "authorIris", IRI_SEPARATOR)
        .into_iter()
        .map(|iri| AuthorRef { id: person_id(&iri), iri })
        .collect();

    Some(SearchItem {
        id: paper_id(&iri),
        title: row.text("title").unwrap_or_default().to_string(),
        year: row.non_empty("year").map(String::from),
        authors_text: display_names(row, "authorNames").join(", "),
        authors,
        iri,
    })
}

/// Map all search rows, dropping rows without a subject.
#[must_use]
pub fn search_items(rows: &[SparqlRow]) -> Vec<SearchItem> {
    rows.iter().filter_map(search_item).collect()
}

/// Flatten a detail row into [`PaperDetails`].
#[must_use]
pub fn paper_details(id: &str, iri: &str, row: &SparqlRow) -> PaperDetails {
    PaperDetails {
        id: id.to_string(),
        iri: iri.to_string(),
        kind: scalar(row, "type"),
        title: row.text("title").unwrap_or_default().to_string(),
        subtitle: scalar(row, "subtitle"),
        year: scalar(row, "year"),
        r#abstract: scalar(row, "abstract"),
        keywords: split_row(row, "keywords", NAME_SEPARATOR),
        same_as: split_row(row, "sameAs", IRI_SEPARATOR),
        urls: split_row(row, "urls", IRI_SEPARATOR),
        is_part_of: split_row(row, "isPartOf", IRI_SEPARATOR),
        volume: scalar(row, "volume"),
        issue: scalar(row, "issue"),
        page_start: scalar(row, "pageStart"),
        page_end: scalar(row, "pageEnd"),
        number_of_pages: scalar(row, "numberOfPages"),
        access_rights: scalar(row, "accessRights"),
        licenses: split_row(row, "licenses", IRI_SEPARATOR),
        publisher_iris: split_row(row, "publisherIris", IRI_SEPARATOR),
        publisher_names: split_row(row, "publisherNames", IRI_SEPARATOR),
        authors: display_names(row, "authorNames"),
        editors: display_names(row, "editorNames"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SparqlValue;

    fn row(pairs: &[(&str, SparqlValue)]) -> SparqlRow {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn test_split_multi() {
        assert_eq!(split_multi(" a | b ||c ", '|'), vec!["a", "b", "c"]);
        assert!(split_multi("", ';').is_empty());
        assert!(split_multi(" ; ", ';').is_empty());
    }

    #[test]
    fn test_search_item() {
        let author_iris = [
            "https://dice-research.org/id/person/hash/aa",
            "https://dice-research.org/id/person/uni/jl",
        ]
        .join("|");
        let row = row(&[
            ("paper", SparqlValue::uri("https://dice-research.org/id/publication/ris/42")),
            ("title", SparqlValue::literal("Linked Data Quality")),
            ("year", SparqlValue::literal("2016")),
            ("authorNames", SparqlValue::literal("Zaveri, Amrapali; Lehmann, Jens")),
            ("authorIris", SparqlValue::literal(author_iris)),
        ]);

        let item = search_item(&row).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.title, "Linked Data Quality");
        assert_eq!(item.year.as_deref(), Some("2016"));
        assert_eq!(item.authors_text, "Amrapali Zaveri, Jens Lehmann");
        assert_eq!(item.authors.len(), 2);
        assert_eq!(item.authors[0].id, "aa");
        assert_eq!(item.authors[1].id, "jl");
    }

    #[test]
    fn test_rows_without_subject_are_dropped() {
        let rows = vec![
            row(&[("title", SparqlValue::literal("Orphan"))]),
            row(&[("paper", SparqlValue::uri("https://dice-research.org/id/publication/ris/1"))]),
        ];

        let items = search_items(&rows);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].title, "");
        assert!(items[0].year.is_none());
        assert!(items[0].authors.is_empty());
    }

    #[test]
    fn test_paper_details() {
        let row = row(&[
            ("paper", SparqlValue::uri("https://dice-research.org/id/publication/ris/7")),
            ("type", SparqlValue::uri("https://schema.org/ScholarlyArticle")),
            ("title", SparqlValue::literal("A Survey")),
            ("keywords", SparqlValue::literal("rdf; sparql; ")),
            ("urls", SparqlValue::literal("https://a.org|https://b.org")),
            ("pageStart", SparqlValue::literal("12")),
            ("authorNames", SparqlValue::literal("Hopper, Grace")),
            ("editorNames", SparqlValue::literal("Knuth, Donald E.; Dijkstra")),
            ("publisherNames", SparqlValue::literal("Springer")),
        ]);

        let details = paper_details("7", "https://dice-research.org/id/publication/ris/7", &row);
        assert_eq!(details.kind.as_deref(), Some("https://schema.org/ScholarlyArticle"));
        assert_eq!(details.title, "A Survey");
        assert_eq!(details.keywords, vec!["rdf", "sparql"]);
        assert_eq!(details.urls, vec!["https://a.org", "https://b.org"]);
        assert_eq!(details.page_start.as_deref(), Some("12"));
        assert!(details.page_end.is_none());
        assert_eq!(details.authors, vec!["Grace Hopper"]);
        assert_eq!(details.editors, vec!["Donald E. Knuth", "Dijkstra"]);
        assert_eq!(details.publisher_names, vec!["Springer"]);
        assert!(details.same_as.is_empty());
        assert!(details.r#abstract.is_none());
    }
}
