#![no_main]

use libfuzzer_sys::fuzz_target;
use rdf_paper_search::query::builder::{MatchMode, composite_search};
use rdf_paper_search::query::{escape_literal, parse_query};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and rendering must never panic
        let intent = parse_query(input);
        if intent.direct_id.is_some() {
            assert!(intent.title.is_empty() && intent.author.is_empty() && intent.year.is_empty());
        }
        let _ = composite_search(&intent, MatchMode::Prefix);
        assert!(!escape_literal(input).contains('\n'));
    }
});
