//! Error types for the OpenAlex MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Requested resource name is not a known OpenAlex collection.
    /// Reported before any network I/O happens.
    #[error("invalid endpoint: {name}")]
    InvalidResource {
        /// The rejected resource name.
        name: String,
    },

    /// Non-2xx HTTP status from the API.
    #[error("OpenAlex returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Response body was not valid JSON.
    #[error("failed to decode response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed response carried no usable `results`.
    #[error("no data found for query: {query}")]
    NoData {
        /// The search query that produced the empty response.
        query: String,
    },
}

impl ClientError {
    /// Create an invalid resource error.
    #[must_use]
    pub fn invalid_resource(name: impl Into<String>) -> Self {
        Self::InvalidResource { name: name.into() }
    }

    /// Create a status error from a non-2xx response.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status { status, body: body.into() }
    }

    /// Create a no-data error naming the original query.
    #[must_use]
    pub fn no_data(query: impl Into<String>) -> Self {
        Self::NoData { query: query.into() }
    }

    /// Returns true if this error was raised before any request was sent.
    #[must_use]
    pub const fn is_pre_request(&self) -> bool {
        matches!(self, Self::InvalidResource { .. })
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal tool logic error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::InvalidResource { name }) => {
                format!(
                    "Unknown endpoint '{name}'. Valid endpoints: works, authors, venues, \
                     institutions, concepts, ids."
                )
            }
            Self::Client(ClientError::NoData { query }) => {
                format!("No data found for query: {query}")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
