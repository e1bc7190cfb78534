//! Fuzzing library for openalex-mcp.
//!
//! This crate provides fuzzing targets for testing JSON deserialization of
//! the OpenAlex API models and the works formatter.
//!
//! # Usage
//!
//! ```bash
//! cd crates/openalex-fuzz
//! cargo +nightly fuzz run fuzz_work_parse -- -max_total_time=60
//! ```

pub use openalex_mcp::formatters;
pub use openalex_mcp::models;
