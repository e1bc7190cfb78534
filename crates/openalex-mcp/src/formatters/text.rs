//! Plain-text rendering of works results.

use serde_json::Value;

use crate::models::Work;

/// Placeholder rendered for missing fields.
const PLACEHOLDER: &str = "N/A";

/// Separator line between work blocks.
const SEPARATOR: &str = "\n---\n";

/// Format a full works search response as plain text.
///
/// A missing `results` key is treated as an empty result set. An empty set
/// renders as `"No works found."`; otherwise the per-work blocks are joined
/// with a separator line and a trailing count summary is appended. Pure
/// string transformation, never fails.
#[must_use]
pub fn format_works_response(response: &Value) -> String {
    let results =
        response.get("results").and_then(Value::as_array).map_or(&[] as &[Value], Vec::as_slice);

    if results.is_empty() {
        return "No works found.".to_string();
    }

    let blocks: Vec<String> = results.iter().map(format_work).collect();
    format!("{}\nNumber of works found: {}", blocks.join(SEPARATOR), results.len())
}

/// Format a single work record as a fixed multi-line block.
///
/// An empty or non-object record renders as `"No data found."`. Missing
/// fields render as the placeholder; an author without a name contributes the
/// placeholder to the joined author list.
#[must_use]
pub fn format_work(record: &Value) -> String {
    let Some(fields) = record.as_object().filter(|obj| !obj.is_empty()) else {
        return "No data found.".to_string();
    };

    let work: Work = serde_json::from_value(Value::Object(fields.clone())).unwrap_or_default();

    let authors = if work.authors.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        work.authors
            .iter()
            .map(|a| a.name.as_deref().unwrap_or(PLACEHOLDER))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Title: {}\nDOI: {}\nJournal: {}\nAuthors: {}\nPublication Date: {}",
        work.title.as_deref().unwrap_or(PLACEHOLDER),
        work.doi.as_deref().unwrap_or(PLACEHOLDER),
        work.journal.as_deref().unwrap_or(PLACEHOLDER),
        authors,
        work.publication_date.as_deref().unwrap_or(PLACEHOLDER),
    )
}
