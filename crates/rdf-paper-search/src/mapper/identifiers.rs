//! Short identifiers derived from graph IRIs.

use crate::config::namespace;

/// Short paper identifier: the segment after `/ris/`, or the IRI itself.
#[must_use]
pub fn paper_id(iri: &str) -> String {
    segment_after(iri, namespace::PAPER_MARKER).unwrap_or(iri).to_string()
}

/// Short person identifier: the segment after `/hash/` or `/uni/`, or the IRI itself.
#[must_use]
pub fn person_id(iri: &str) -> String {
    namespace::PERSON_MARKERS
        .iter()
        .find_map(|marker| segment_after(iri, marker))
        .unwrap_or(iri)
        .to_string()
}

/// Paper IRI for a short identifier, percent-encoding the identifier.
#[must_use]
pub fn paper_iri(id: &str) -> String {
    format!("{}{}", namespace::PAPER_BASE, urlencoding::encode(id))
}

/// The final path segment when it directly follows `marker`.
fn segment_after<'a>(iri: &'a str, marker: &str) -> Option<&'a str> {
    let iri = iri.trim_end();
    let start = iri.rfind(marker)? + marker.len();
    let segment = &iri[start..];

    (!segment.is_empty() && !segment.contains(['/', '#'])).then_some(segment)
}
