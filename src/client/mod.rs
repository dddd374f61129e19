//! HTTP client and dispatch layer for the Busha Commerce API.
//!
//! This module provides the main entry point [`CommerceClient`]. Every
//! resource service funnels through a single dispatch method that builds
//! the request, injects the API key, encodes and decodes JSON and maps
//! non-2xx statuses to [`ApiError`](crate::ApiError).
//!
//! # Example
//!
//! ```no_run
//! use busha_commerce::{ClientConfig, CommerceClient};
//!
//! # async fn example() -> busha_commerce::Result<()> {
//! let client = CommerceClient::with_config(
//!     "test_your_secret_key",
//!     ClientConfig::default().with_debug(true),
//! )?;
//!
//! let events = client.events().list(&Default::default()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod query;

pub use config::{
    ClientConfig, RequestLogger, TracingLogger, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use http::{CommerceClient, API_KEY_ENV, API_KEY_HEADER};
pub use paginated::{PaginatedStream, FIRST_PAGE};
pub use query::ListParams;
pub(crate) use http::{require_id, ClientInner};
