//! Free-text search intent extraction.
//!
//! Rules are applied in order and the first match wins:
//!
//! 1. A paper IRI path, an `id:`/`ris:` token, or an all-digit string whose
//!    length is not 4 is a direct identifier lookup.
//! 2. Exactly four digits is a year-only search.
//! 3. `author:`/`a:` takes everything up to the next `year:`/`y:` marker.
//! 4. `year:`/`y:` takes four digits; otherwise the first bare four-digit
//!    token is taken as the year.
//! 5. The remainder is the title phrase.
//!
//! Markers are matched anywhere in the input, so a title that itself
//! contains `year:` or `a:` is split as if it were a marker.

use std::sync::LazyLock;

use regex::Regex;

static RIS_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S*/publication/ris/([^/#?\s]+)/?$").expect("valid ris path regex pattern")
});

static PREFIXED_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:id|ris)\s*:\s*(\S+)$").expect("valid prefixed id regex pattern")
});

static YEAR_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year regex pattern"));

static AUTHOR_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(?:author|a):").expect("valid author marker regex pattern")
});

static YEAR_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(?:year|y):").expect("valid year marker regex pattern")
});

static YEAR_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(?:year|y):\s*([0-9]{4})\b").expect("valid year segment regex pattern")
});

static BARE_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{4})\b").expect("valid bare year regex pattern"));

/// Structured search intent.
///
/// Either `direct_id` is set and the other fields are empty, or `direct_id`
/// is `None` and any subset of title/author/year is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchIntent {
    /// Title phrase.
    pub title: String,

    /// Author name phrase.
    pub author: String,

    /// Four-digit year.
    pub year: String,

    /// Short paper identifier for a direct lookup.
    pub direct_id: Option<String>,
}

impl SearchIntent {
    /// Intent for a plain title search.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Intent for a direct identifier lookup.
    #[must_use]
    pub fn direct(id: impl Into<String>) -> Self {
        Self { direct_id: Some(id.into()), ..Self::default() }
    }

    /// True when nothing can be searched for.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.direct_id.is_none()
            && self.title.is_empty()
            && self.author.is_empty()
            && self.year.is_empty()
    }

    /// True when only a title phrase is present.
    #[must_use]
    pub fn is_title_only(&self) -> bool {
        self.direct_id.is_none()
            && !self.title.is_empty()
            && self.author.is_empty()
            && self.year.is_empty()
    }

    /// Cache key component describing the parsed fields.
    #[must_use]
    pub fn cache_fragment(&self) -> String {
        format!(
            "t={}|a={}|y={}|id={}",
            self.title.to_lowercase(),
            self.author.to_lowercase(),
            self.year,
            self.direct_id.as_deref().unwrap_or("")
        )
    }
}

/// Trim, lower-case and collapse whitespace.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    collapse_whitespace(&raw.to_lowercase())
}

/// Parse raw search input into a [`SearchIntent`].
#[must_use]
pub fn parse_query(raw: &str) -> SearchIntent {
    let input = raw.trim();
    if input.is_empty() {
        return SearchIntent::default();
    }

    if let Some(id) = direct_identifier(input) {
        return SearchIntent::direct(id);
    }

    if YEAR_ONLY_RE.is_match(input) {
        return SearchIntent { year: input.to_string(), ..SearchIntent::default() };
    }

    let mut rest = input.to_string();
    let author = take_author(&mut rest).unwrap_or_default();
    let year = take_year(&mut rest).unwrap_or_default();

    SearchIntent { title: collapse_whitespace(&rest), author, year, direct_id: None }
}

fn direct_identifier(input: &str) -> Option<String> {
    if let Some(caps) = RIS_PATH_RE.captures(input) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = PREFIXED_ID_RE.captures(input) {
        return Some(caps[1].to_string());
    }
    if input.len() != 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        return Some(input.to_string());
    }
    None
}

/// Remove an `author:` segment from `rest`, returning the author phrase.
fn take_author(rest: &mut String) -> Option<String> {
    let marker = AUTHOR_MARKER_RE.find(rest)?;
    let after = &rest[marker.end()..];
    let end = YEAR_MARKER_RE.find(after).map_or(after.len(), |m| m.start());

    let author = collapse_whitespace(&after[..end]);
    *rest = format!("{} {}", &rest[..marker.start()], &after[end..]);

    (!author.is_empty()).then_some(author)
}

/// Remove a `year:` segment, or failing that the first bare four-digit token.
fn take_year(rest: &mut String) -> Option<String> {
    if let Some(caps) = YEAR_SEGMENT_RE.captures(rest) {
        let whole = caps.get(0)?;
        let year = caps[1].to_string();
        *rest = format!("{} {}", &rest[..whole.start()], &rest[whole.end()..]);
        return Some(year);
    }

    let caps = BARE_YEAR_RE.captures(rest)?;
    let token = caps.get(1)?;
    let year = token.as_str().to_string();
    *rest = format!("{} {}", &rest[..token.start()], &rest[token.end()..]);
    Some(year)
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_identifiers_are_direct() {
        assert_eq!(parse_query("id:123"), SearchIntent::direct("123"));
        assert_eq!(parse_query("ris:123"), SearchIntent::direct("123"));
        assert_eq!(parse_query("ID: 77"), SearchIntent::direct("77"));
    }

    #[test]
    fn test_bare_numeric_not_four_digits_is_direct() {
        assert_eq!(parse_query("12345"), SearchIntent::direct("12345"));
        assert_eq!(parse_query("123"), SearchIntent::direct("123"));
    }

    #[test]
    fn test_paper_iri_is_direct() {
        let intent = parse_query("https://dice-research.org/id/publication/ris/4711");
        assert_eq!(intent, SearchIntent::direct("4711"));
    }

    #[test]
    fn test_four_digits_is_year_only() {
        let intent = parse_query("2024");
        assert_eq!(intent.year, "2024");
        assert!(intent.title.is_empty());
        assert!(intent.author.is_empty());
        assert!(intent.direct_id.is_none());
    }

    #[test]
    fn test_author_year_title() {
        let intent = parse_query("author: Smith year:2020 neural nets");
        assert_eq!(intent.title, "neural nets");
        assert_eq!(intent.author, "Smith");
        assert_eq!(intent.year, "2020");
        assert!(intent.direct_id.is_none());
    }

    #[test]
    fn test_short_markers() {
        let intent = parse_query("graphs a: Ngonga Ngomo y:2019");
        assert_eq!(intent.title, "graphs");
        assert_eq!(intent.author, "Ngonga Ngomo");
        assert_eq!(intent.year, "2019");
    }

    #[test]
    fn test_author_runs_to_end_without_year_marker() {
        let intent = parse_query("author: Turing, Alan");
        assert_eq!(intent.author, "Turing, Alan");
        assert!(intent.title.is_empty());
        assert!(intent.year.is_empty());
    }

    #[test]
    fn test_bare_year_is_extracted_from_title() {
        let intent = parse_query("question answering 2021 benchmark");
        assert_eq!(intent.year, "2021");
        assert_eq!(intent.title, "question answering benchmark");
    }

    #[test]
    fn test_plain_title() {
        let intent = parse_query("  Knowledge   Graph Embeddings ");
        assert!(intent.is_title_only());
        assert_eq!(intent.title, "Knowledge Graph Embeddings");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_query("   ").is_empty());
    }

    #[test]
    fn test_year_marker_without_digits_stays_in_title() {
        let intent = parse_query("year:abc ontologies");
        assert!(intent.year.is_empty());
        assert_eq!(intent.title, "year:abc ontologies");
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Neural\tNETS  now "), "neural nets now");
    }

    #[test]
    fn test_cache_fragment_distinguishes_fields() {
        let a = parse_query("author: smith");
        let b = parse_query("smith");
        assert_ne!(a.cache_fragment(), b.cache_fragment());
    }
}
