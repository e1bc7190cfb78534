//! The `openalex_search` tool.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{ALL_RESOURCES, OpenAlexSearchInput, Resource, ResponseFormat};

/// Search tool over the fixed set of OpenAlex collections.
pub struct OpenAlexSearchTool;

#[async_trait::async_trait]
impl McpTool for OpenAlexSearchTool {
    fn name(&self) -> &'static str {
        "openalex_search"
    }

    fn description(&self) -> &'static str {
        "Search the OpenAlex scholarly metadata API for a given query. \
         Returns one page of results from the chosen collection, either as \
         raw JSON or as a plain-text summary of works."
    }

    fn input_schema(&self) -> serde_json::Value {
        let endpoints: Vec<&str> = ALL_RESOURCES.iter().map(|r| r.as_str()).collect();
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'transformer attention mechanisms')"
                },
                "endpoint": {
                    "type": "string",
                    "enum": endpoints,
                    "default": "works",
                    "description": "OpenAlex collection to search"
                },
                "params": {
                    "type": "object",
                    "description": "Query parameters replacing the collection defaults \
                                    (e.g., {\"per_page\": 5})"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["json", "text"],
                    "default": "json",
                    "description": "Raw JSON, or a plain-text rendering (works only)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let input: OpenAlexSearchInput = serde_json::from_value(input)?;

        if input.query.trim().is_empty() {
            return Err(ToolError::validation("query", "cannot be empty"));
        }

        let data =
            ctx.client.search(&input.query, &input.endpoint, input.params.as_ref()).await?;

        // Text rendering is defined for works payloads only; other
        // collections fall back to JSON.
        if input.response_format == ResponseFormat::Text
            && input.endpoint == Resource::Works.as_str()
        {
            return Ok(formatters::format_works_response(&data));
        }

        Ok(serde_json::to_string_pretty(&data)?)
    }
}
