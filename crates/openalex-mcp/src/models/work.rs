//! Work record model matching the OpenAlex works response shape.

use serde::{Deserialize, Serialize};

/// One scholarly-publication metadata entry.
///
/// Every field is optional; absent values resolve to a placeholder at render
/// time rather than failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Digital Object Identifier.
    #[serde(default)]
    pub doi: Option<String>,

    /// Journal name.
    #[serde(default)]
    pub journal: Option<String>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,
}

/// Minimal author reference inside a work record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author display name.
    #[serde(default)]
    pub name: Option<String>,
}
