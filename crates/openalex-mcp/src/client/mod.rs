//! OpenAlex API client.
//!
//! One async GET per call: resolve the collection, merge parameters, fetch,
//! parse. No retries, no caching, no shared state between calls.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::Resource;

/// OpenAlex API client.
#[derive(Debug, Clone)]
pub struct OpenAlexClient {
    /// Underlying HTTP client with fixed identification headers.
    client: Client,

    /// API base URL.
    base_url: String,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, HeaderValue::from_static(api::USER_AGENT));
        headers.insert("mailto", HeaderValue::from_static(api::MAILTO));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.base_url })
    }

    /// Search an OpenAlex collection for a query.
    ///
    /// Validates `resource` against the known collection set before any
    /// network I/O. The working parameter set is the caller's `override_params`
    /// when present, otherwise the collection's defaults (empty for
    /// collections without a default table); either way it is copied into a
    /// fresh map and the `search` key is injected, overwriting any prior
    /// value. Returns the parsed response body unchanged.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidResource`] for an unknown collection name
    /// - [`ClientError::Status`] on a non-2xx response
    /// - [`ClientError::Parse`] when the body is not valid JSON
    /// - [`ClientError::NoData`] when the body has no `results` key
    pub async fn search(
        &self,
        query: &str,
        resource: &str,
        override_params: Option<&Map<String, Value>>,
    ) -> ClientResult<Value> {
        let resource: Resource =
            resource.parse().map_err(|_| ClientError::invalid_resource(resource))?;

        let mut params = match override_params {
            Some(overrides) => overrides.clone(),
            None => resource.default_params(),
        };
        params.insert("search".to_string(), Value::String(query.to_string()));

        let url = format!("{}{}", self.base_url, resource.path());
        let pairs = query_pairs(&params);

        tracing::debug!(%resource, url = %url, "fetching OpenAlex data");

        let response = self.client.get(&url).query(&pairs).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        if !data.as_object().is_some_and(|obj| obj.contains_key("results")) {
            return Err(ClientError::no_data(query));
        }

        Ok(data)
    }
}

/// Flatten a JSON parameter map into query-string pairs.
///
/// Array values expand into repeated keys (`filter=doi&filter=title`), null
/// values are skipped, and scalars render as their plain text.
fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar_text(item)));
                }
            }
            Value::Null => {}
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
