//! Output formatting for tool responses.

mod text;

pub use text::{format_work, format_works_response};
