#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_mcp::models::Work;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as a Work
    // Should never panic, only return Ok or Err
    let _ = serde_json::from_slice::<Work>(data);
});
