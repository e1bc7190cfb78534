#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_mcp::formatters::format_works_response;

fuzz_target!(|data: &[u8]| {
    // The formatter must be total over arbitrary JSON
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = format_works_response(&json);
    }
});
