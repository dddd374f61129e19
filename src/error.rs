//! Error types for the Busha Commerce API client.
//!
//! Failures fall into two classes. API errors are non-2xx responses that
//! the server described with an `{"error": {"name", "message"}}` body and
//! are surfaced as [`Error::Api`]. Everything else (bad identifiers, JSON
//! encode/decode failures, transport failures) is local and gets its own
//! variant, so callers can branch on the class with a `match` or with
//! [`Error::is_api_error`] instead of inspecting strings.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A specialized `Result` type for Busha Commerce operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Busha Commerce API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required resource identifier was empty.
    ///
    /// Raised before any request is sent.
    #[error("no {0} ID provided")]
    MissingId(&'static str),

    /// The secret key is empty or does not carry a `live_`/`test_` prefix.
    #[error("invalid secret key: {0}")]
    InvalidKey(String),

    /// Client configuration is unusable (bad base URL, header value).
    #[error("configuration error: {0}")]
    Config(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 2xx response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A non-2xx response body was not a well-formed error object.
    #[error("failed to decode error body (status {status}): {source}")]
    MalformedError {
        /// HTTP status code of the response
        status: u16,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport failed (connection, timeout, TLS, client build).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request path could not be resolved against the base URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns `true` if the server rejected the request with a
    /// structured error body.
    ///
    /// # Example
    ///
    /// ```
    /// use busha_commerce::Error;
    ///
    /// fn describe(err: &Error) -> &'static str {
    ///     if err.is_api_error() { "rejected by the API" } else { "local failure" }
    /// }
    ///
    /// assert_eq!(describe(&Error::MissingId("charge")), "local failure");
    /// ```
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Returns the structured API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised by local input validation,
    /// before anything was sent.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::MissingId(_) | Error::InvalidKey(_))
    }

    /// Returns `true` if a response arrived but could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::MalformedError { .. })
    }
}

/// Structured error returned by the API for non-2xx responses.
///
/// Its `Display` form is the lower-cased `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Short machine-oriented error name, e.g. `"ValidationError"`
    pub name: String,
    /// Human-readable description from the server
    pub message: String,
}

impl ApiError {
    /// Decode an error body of the form `{"error": {"name", "message"}}`.
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Result<Self> {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: ErrorDetail,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            #[serde(default)]
            name: String,
            #[serde(default)]
            message: String,
        }

        let parsed: ErrorBody = serde_json::from_slice(body)
            .map_err(|source| Error::MalformedError { status, source })?;

        Ok(Self {
            status,
            name: parsed.error.name,
            message: parsed.error.message,
        })
    }

    /// Returns `true` for 4xx responses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Returns `true` for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message.to_lowercase())
    }
}

impl std::error::Error for ApiError {}
