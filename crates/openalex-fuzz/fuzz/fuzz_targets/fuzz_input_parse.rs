#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_mcp::models::OpenAlexSearchInput;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as OpenAlexSearchInput
    let _ = serde_json::from_slice::<OpenAlexSearchInput>(data);
});
