//! OpenAlex collection names, endpoint paths, and default query parameters.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value, json};

/// A logical OpenAlex collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Scholarly works (articles, books, datasets).
    Works,
    /// Author profiles.
    Authors,
    /// Publication venues (journals, repositories).
    Venues,
    /// Institutions.
    Institutions,
    /// Concepts/topics.
    Concepts,
    /// Identifier lookups.
    Ids,
}

/// All known resources, in table order.
pub const ALL_RESOURCES: &[Resource] = &[
    Resource::Works,
    Resource::Authors,
    Resource::Venues,
    Resource::Institutions,
    Resource::Concepts,
    Resource::Ids,
];

impl Resource {
    /// The lowercase collection name as used in tool input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Works => "works",
            Self::Authors => "authors",
            Self::Venues => "venues",
            Self::Institutions => "institutions",
            Self::Concepts => "concepts",
            Self::Ids => "ids",
        }
    }

    /// URL path segment for this collection.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Works => "/works",
            Self::Authors => "/authors",
            Self::Venues => "/venues",
            Self::Institutions => "/institutions",
            Self::Concepts => "/concepts",
            Self::Ids => "/ids",
        }
    }

    /// Default query parameters for this collection.
    ///
    /// Only `works` and `authors` carry defaults; every other collection
    /// yields an empty set and the request goes out with just the injected
    /// `search` key. Returns a fresh map each call so callers can mutate
    /// freely without aliasing a shared table.
    #[must_use]
    pub fn default_params(self) -> Map<String, Value> {
        let params = match self {
            Self::Works => json!({
                "filter": ["doi", "title", "abstract"],
                "sort": ["relevance", "date"],
                "page": 1,
                "per_page": 10,
            }),
            Self::Authors => json!({
                "filter": ["orcid", "name"],
                "sort": ["relevance", "date"],
                "page": 1,
                "per_page": 10,
            }),
            _ => json!({}),
        };
        match params {
            Value::Object(map) => map,
            _ => unreachable!("default params are always objects"),
        }
    }
}

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "works" => Ok(Self::Works),
            "authors" => Ok(Self::Authors),
            "venues" => Ok(Self::Venues),
            "institutions" => Ok(Self::Institutions),
            "concepts" => Ok(Self::Concepts),
            "ids" => Ok(Self::Ids),
            _ => Err(UnknownResource(s.to_string())),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for resource names outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResource(pub String);

impl fmt::Display for UnknownResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource: {}", self.0)
    }
}

impl std::error::Error for UnknownResource {}
