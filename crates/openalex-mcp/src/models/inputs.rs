//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Input for the `openalex_search` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAlexSearchInput {
    /// Search query (e.g., "transformer attention mechanisms").
    pub query: String,

    /// OpenAlex collection to search.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Caller-supplied query parameters. When present they replace the
    /// collection's default parameter set entirely.
    #[serde(default)]
    pub params: Option<Map<String, Value>>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_endpoint() -> String {
    "works".to_string()
}

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Raw API JSON, pretty-printed.
    #[default]
    Json,
    /// Plain-text rendering of works results.
    Text,
}

impl ResponseFormat {
    /// Check if this is the text format.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}
