//! Data models for OpenAlex API entities and tool inputs.
//!
//! All response models use `#[serde(default)]` so that partial API payloads
//! deserialize cleanly; missing fields surface as `None`.

mod inputs;
mod resource;
mod work;

pub use inputs::{OpenAlexSearchInput, ResponseFormat};
pub use resource::{ALL_RESOURCES, Resource, UnknownResource};
pub use work::{AuthorRef, Work};
