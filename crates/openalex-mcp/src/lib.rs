//! OpenAlex MCP Server
//!
//! A Model Context Protocol (MCP) server for the OpenAlex scholarly metadata
//! API. Exposes a single `openalex_search` tool that queries the fixed set of
//! OpenAlex collections (works, authors, venues, institutions, concepts, ids)
//! and returns raw JSON or a plain-text rendering of works results.
//!
//! # Example
//!
//! ```no_run
//! use openalex_mcp::{client::OpenAlexClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OpenAlexClient::new(Config::new())?;
//!     let data = client.search("crispr", "works", None).await?;
//!     println!("{data}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::OpenAlexClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
