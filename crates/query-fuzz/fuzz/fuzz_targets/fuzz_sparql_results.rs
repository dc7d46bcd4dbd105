#![no_main]

use libfuzzer_sys::fuzz_target;
use rdf_paper_search::mapper;
use rdf_paper_search::models::SparqlResults;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes as a results document, then map every row
    if let Ok(results) = serde_json::from_slice::<SparqlResults>(data) {
        let rows = results.into_rows();
        let _ = mapper::search_items(&rows);
        for row in &rows {
            let _ = mapper::paper_details("fuzz", "fuzz", row);
        }
    }
});
