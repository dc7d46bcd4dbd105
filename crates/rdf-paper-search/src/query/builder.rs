//! SPARQL query templates.
//!
//! Every literal interpolated into a template goes through [`escape_literal`].
//! IRIs are built from percent-encoded identifiers and never contain `<`, `>`
//! or `"`.

use std::fmt::Write as _;

use super::parser::SearchIntent;
use crate::config::{namespace, search};

const SEARCH_PREFIXES: &str = "PREFIX schema: <https://schema.org/>\n";

const DETAIL_PREFIXES: &str = "PREFIX schema: <https://schema.org/>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX dcterms: <http://purl.org/dc/terms/>
";

/// Separator used when aggregating names.
pub const NAME_SEPARATOR: char = ';';

/// Separator used when aggregating IRIs.
pub const IRI_SEPARATOR: char = '|';

/// How the title phrase is matched against the lower-cased title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// `STRSTARTS`
    Prefix,
    /// `CONTAINS`
    Infix,
}

impl MatchMode {
    /// SPARQL function implementing this mode.
    #[must_use]
    pub const fn function(self) -> &'static str {
        match self {
            Self::Prefix => "STRSTARTS",
            Self::Infix => "CONTAINS",
        }
    }

    /// Name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "starts",
            Self::Infix => "contains",
        }
    }
}

/// Escape text for use inside a double-quoted SPARQL string literal.
#[must_use]
pub fn escape_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Legacy title-only search.
///
/// The escaped phrase is bound once via `VALUES ?q` and compared against the
/// lower-cased title.
#[must_use]
pub fn title_search(title: &str, mode: MatchMode) -> String {
    let q = escape_literal(title);
    let filters = format!(
        "FILTER({}(LCASE(STR(?t)), LCASE(STR(?q))))",
        mode.function()
    );
    search_query(&format!("VALUES ?q {{ \"{q}\" }}"), &filters)
}

/// Composite title/author/year search.
///
/// Direct identifiers render the direct lookup shape. Returns `None` when the
/// intent is empty and nothing should be queried.
#[must_use]
pub fn composite_search(intent: &SearchIntent, mode: MatchMode) -> Option<String> {
    if let Some(id) = &intent.direct_id {
        return Some(direct_lookup(&crate::mapper::paper_iri(id)));
    }
    if intent.is_empty() {
        return None;
    }

    let mut filters = String::new();

    if !intent.title.is_empty() {
        let _ = writeln!(
            filters,
            "FILTER({}(LCASE(STR(?t)), LCASE(\"{}\")))",
            mode.function(),
            escape_literal(&intent.title)
        );
    }

    if !intent.author.is_empty() {
        let _ = writeln!(
            filters,
            "FILTER EXISTS {{
    ?paper schema:author ?fa .
    ?fa schema:name ?fan .
    FILTER(CONTAINS(LCASE(STR(?fan)), LCASE(\"{}\")))
  }}",
            escape_literal(&intent.author)
        );
    }

    if !intent.year.is_empty() {
        let _ = writeln!(
            filters,
            "?paper schema:datePublished ?yf .
  FILTER(SUBSTR(STR(?yf), 1, 4) = \"{}\")",
            escape_literal(&intent.year)
        );
    }

    Some(search_query("", filters.trim_end()))
}

/// Lookup of a single paper by IRI, returning the search item projection.
#[must_use]
pub fn direct_lookup(paper_iri: &str) -> String {
    format!(
        "{SEARCH_PREFIXES}
SELECT
  ?paper
  (SAMPLE(?t) AS ?title)
  (SAMPLE(?year0) AS ?year)
  (GROUP_CONCAT(DISTINCT STR(?aName); separator=\"{NAME_SEPARATOR} \") AS ?authorNames)
  (GROUP_CONCAT(DISTINCT STR(?a); separator=\"{IRI_SEPARATOR}\") AS ?authorIris)
WHERE {{
  BIND(<{paper_iri}> AS ?paper)
  OPTIONAL {{ ?paper schema:title ?title0 . }}
  OPTIONAL {{ ?paper schema:name ?name0 . }}
  BIND(COALESCE(?title0, ?name0) AS ?t)
  FILTER(BOUND(?t))
  FILTER(STRSTARTS(STR(?paper), \"{base}\"))

  OPTIONAL {{ ?paper schema:datePublished ?year0 . }}
  OPTIONAL {{
    ?paper schema:author ?a .
    OPTIONAL {{ ?a schema:name ?aName . }}
  }}
}}
GROUP BY ?paper
LIMIT {limit}
",
        base = namespace::PAPER_BASE,
        limit = search::DETAIL_LIMIT,
    )
}

/// Full detail projection of a single paper.
///
/// Yields no rows when the IRI has no triples.
#[must_use]
pub fn paper_details(paper_iri: &str) -> String {
    format!(
        "{DETAIL_PREFIXES}
SELECT
  ?paper
  (SAMPLE(?type0) AS ?type)
  (SAMPLE(?nPages) AS ?numberOfPages)
  (SAMPLE(?name) AS ?title)
  (SAMPLE(?alt) AS ?subtitle)
  (SAMPLE(?year0) AS ?year)
  (SAMPLE(?abs) AS ?abstract)
  (GROUP_CONCAT(DISTINCT ?kw; separator=\"{NAME_SEPARATOR} \") AS ?keywords)
  (GROUP_CONCAT(DISTINCT STR(?sameAs0); separator=\"{IRI_SEPARATOR}\") AS ?sameAs)
  (GROUP_CONCAT(DISTINCT STR(?url0); separator=\"{IRI_SEPARATOR}\") AS ?urls)
  (GROUP_CONCAT(DISTINCT STR(?partOf); separator=\"{IRI_SEPARATOR}\") AS ?isPartOf)
  (SAMPLE(?vol) AS ?volume)
  (SAMPLE(?iss) AS ?issue)
  (SAMPLE(?pStart) AS ?pageStart)
  (SAMPLE(?pEnd) AS ?pageEnd)
  (GROUP_CONCAT(DISTINCT STR(?publisher); separator=\"{IRI_SEPARATOR}\") AS ?publisherIris)
  (GROUP_CONCAT(DISTINCT STR(?publisherName); separator=\"{IRI_SEPARATOR}\") AS ?publisherNames)
  (SAMPLE(?access) AS ?accessRights)
  (GROUP_CONCAT(DISTINCT STR(?license); separator=\"{IRI_SEPARATOR}\") AS ?licenses)
  (GROUP_CONCAT(DISTINCT STR(?a); separator=\"{IRI_SEPARATOR}\") AS ?authorIris)
  (GROUP_CONCAT(DISTINCT STR(?aName); separator=\"{NAME_SEPARATOR} \") AS ?authorNames)
  (GROUP_CONCAT(DISTINCT STR(?e); separator=\"{IRI_SEPARATOR}\") AS ?editorIris)
  (GROUP_CONCAT(DISTINCT STR(?eName); separator=\"{NAME_SEPARATOR} \") AS ?editorNames)
WHERE {{
  BIND(<{paper_iri}> AS ?paper)
  FILTER EXISTS {{ ?paper ?anyP ?anyO }}
  FILTER(STRSTARTS(STR(?paper), \"{base}\"))

  OPTIONAL {{ ?paper rdf:type ?type0 . }}

  OPTIONAL {{ ?paper schema:name ?name . }}
  OPTIONAL {{ ?paper schema:alternateName ?alt . }}
  OPTIONAL {{ ?paper schema:datePublished ?year0 . }}
  OPTIONAL {{ ?paper schema:abstract ?abs . }}
  OPTIONAL {{ ?paper schema:keywords ?kw . }}

  OPTIONAL {{ ?paper schema:sameAs ?sameAs0 . }}
  OPTIONAL {{ ?paper schema:url ?url0 . }}
  OPTIONAL {{ ?paper schema:isPartOf ?partOf . }}

  OPTIONAL {{ ?paper schema:volumeNumber ?vol . }}
  OPTIONAL {{ ?paper schema:issueNumber ?iss . }}
  OPTIONAL {{ ?paper schema:pageStart ?pStart . }}
  OPTIONAL {{ ?paper schema:pageEnd ?pEnd . }}
  OPTIONAL {{ ?paper schema:numberOfPages ?nPages . }}

  OPTIONAL {{ ?paper dcterms:accessRights ?access . }}
  OPTIONAL {{ ?paper dcterms:license ?license . }}

  OPTIONAL {{
    ?paper schema:publisher ?publisher .
    OPTIONAL {{ ?publisher schema:name ?publisherName . }}
  }}

  OPTIONAL {{
    ?paper schema:author ?a .
    OPTIONAL {{ ?a schema:name ?aName . }}
  }}

  OPTIONAL {{
    ?paper schema:editor ?e .
    OPTIONAL {{ ?e schema:name ?eName . }}
  }}
}}
GROUP BY ?paper
LIMIT {limit}
",
        base = namespace::PAPER_BASE,
        limit = search::DETAIL_LIMIT,
    )
}

/// Shared search skeleton: typed papers in the publication namespace with a
/// title, optional year and authors, grouped per paper and ordered by title.
fn search_query(bindings: &str, filters: &str) -> String {
    format!(
        "{SEARCH_PREFIXES}
SELECT
  ?paper
  (SAMPLE(?t) AS ?title)
  (SAMPLE(?year0) AS ?year)
  (GROUP_CONCAT(DISTINCT STR(?aName); separator=\"{NAME_SEPARATOR} \") AS ?authorNames)
  (GROUP_CONCAT(DISTINCT STR(?a); separator=\"{IRI_SEPARATOR}\") AS ?authorIris)
WHERE {{
  {bindings}

  ?paper a ?type .
  FILTER(?type IN (schema:ScholarlyArticle, schema:CreativeWork))

  OPTIONAL {{ ?paper schema:title ?title0 . }}
  OPTIONAL {{ ?paper schema:name ?name0 . }}
  BIND(COALESCE(?title0, ?name0) AS ?t)
  FILTER(BOUND(?t))
  FILTER(STRSTARTS(STR(?paper), \"{base}\"))

  OPTIONAL {{ ?paper schema:datePublished ?year0 . }}

  OPTIONAL {{
    ?paper schema:author ?a .
    OPTIONAL {{ ?a schema:name ?aName . }}
  }}

  {filters}
}}
GROUP BY ?paper
ORDER BY LCASE(STR(SAMPLE(?t)))
LIMIT {limit}
",
        base = namespace::PAPER_BASE,
        limit = search::SEARCH_LIMIT,
    )
}
