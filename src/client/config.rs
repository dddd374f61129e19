//! Client configuration options.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;

/// Default production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.commerce.busha.co";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = "Busha/Commerce-SDK";

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Sink for request debug logging.
///
/// Called before each request is sent while debug logging is enabled.
/// `body` is the encoded JSON for POST/PUT and `None` otherwise.
pub trait RequestLogger: Send + Sync {
    /// Record an outgoing request.
    fn log_request(&self, method: &Method, url: &str, body: Option<&str>);
}

/// Default logger; emits `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn log_request(&self, method: &Method, url: &str, body: Option<&str>) {
        match body {
            Some(body) => tracing::debug!(%method, url, body, "Requesting"),
            None => tracing::debug!(%method, url, "Requesting"),
        }
    }
}

/// Configuration for the Busha Commerce client.
///
/// # Example
///
/// ```
/// use busha_commerce::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-shop/1.0")
///     .with_debug(true);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Transport timeout for the whole request
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// API host that request paths are resolved against
    pub base_url: String,
    /// Whether requests are passed to the logger before sending
    pub debug: bool,
    /// Debug log sink
    pub logger: Arc<dyn RequestLogger>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
            logger: Arc::new(TracingLogger),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Point the client at a different host (staging, local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Enable or disable request debug logging.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Replace the debug log sink.
    pub fn with_logger(mut self, logger: impl RequestLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
