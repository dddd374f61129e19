//! HTTP client implementation for the Busha Commerce API.

use reqwest::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

use crate::api::{
    AddressesService, ChargesService, CheckoutsService, EventsService, InvoicesService,
    PaymentLinksService,
};
use crate::error::ApiError;
use crate::{Environment, Error, Result, SecretKey};

use super::config::ClientConfig;

/// Header carrying the secret key.
pub const API_KEY_HEADER: &str = "X-BC-API-KEY";

/// Environment variable read by [`CommerceClient::from_env`].
pub const API_KEY_ENV: &str = "COMMERCE_KEY";

/// The main client for interacting with the Busha Commerce API.
///
/// The client validates the secret key once, owns the HTTP transport and
/// hands out resource services. Cloning is cheap and clones share the
/// same connection pool.
///
/// # Example
///
/// ```no_run
/// use busha_commerce::{CommerceClient, ListParams};
///
/// # async fn example() -> busha_commerce::Result<()> {
/// let client = CommerceClient::new("test_your_secret_key")?;
///
/// let charges = client.charges().list(&ListParams::new().limit(10)).await?;
/// for charge in &charges.data {
///     println!("{} {}", charge.reference, charge.hosted_url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CommerceClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    http: reqwest::Client,
    key: SecretKey,
    api_key: HeaderValue,
    user_agent: HeaderValue,
    base_url: Url,
    debug: AtomicBool,
    config: ClientConfig,
}

impl CommerceClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is empty or lacks a
    /// `live_`/`test_` prefix.
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(secret_key, ClientConfig::default())
    }

    /// Create a client from the `COMMERCE_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::InvalidKey(format!("{API_KEY_ENV} is not set")))?;
        Self::new(key)
    }

    /// Create a client with custom configuration.
    pub fn with_config(secret_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Self::with_http_client(secret_key, http, config)
    }

    /// Create a client over an existing `reqwest::Client`.
    ///
    /// The supplied client's own timeout applies; `config.timeout` is
    /// ignored.
    pub fn with_http_client(
        secret_key: impl Into<String>,
        http: reqwest::Client,
        config: ClientConfig,
    ) -> Result<Self> {
        let key = SecretKey::new(secret_key)?;

        let mut api_key = HeaderValue::from_str(key.expose())
            .map_err(|_| Error::InvalidKey("secret key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::Config(format!("invalid user agent: {}", config.user_agent)))?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("invalid base URL: {}", config.base_url)));
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                key,
                api_key,
                user_agent,
                base_url,
                debug: AtomicBool::new(config.debug),
                config,
            }),
        })
    }

    /// Get the charges service.
    pub fn charges(&self) -> ChargesService {
        ChargesService::new(self.inner.clone())
    }

    /// Get the checkouts service.
    pub fn checkouts(&self) -> CheckoutsService {
        CheckoutsService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the payment links service.
    pub fn payment_links(&self) -> PaymentLinksService {
        PaymentLinksService::new(self.inner.clone())
    }

    /// Get the addresses service.
    pub fn addresses(&self) -> AddressesService {
        AddressesService::new(self.inner.clone())
    }

    /// Get the events service.
    pub fn events(&self) -> EventsService {
        EventsService::new(self.inner.clone())
    }

    /// Enable or disable request debug logging.
    ///
    /// Calls already in flight may or may not observe the change.
    pub fn set_debug(&self, enabled: bool) {
        self.inner.debug.store(enabled, Ordering::Relaxed);
    }

    /// Whether request debug logging is enabled.
    pub fn is_debug(&self) -> bool {
        self.inner.debug.load(Ordering::Relaxed)
    }

    /// The environment selected by the secret key.
    pub fn environment(&self) -> Environment {
        self.inner.key.environment()
    }

    /// The host request paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

impl ClientInner {
    /// Perform one request and decode the response.
    ///
    /// `body` is encoded for POST and PUT only (a missing body encodes as
    /// `null`); other methods never send one. A 2xx body is decoded into
    /// `T`. Any other status is decoded as a structured error and returned
    /// as [`Error::Api`].
    pub(crate) async fn call<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = if method == Method::POST || method == Method::PUT {
            Some(serde_json::to_vec(&body).map_err(Error::Encode)?)
        } else {
            None
        };

        let url = self.base_url.join(path)?;

        if self.debug.load(Ordering::Relaxed) {
            let logged = payload.as_deref().map(String::from_utf8_lossy);
            self.config
                .logger
                .log_request(&method, url.as_str(), logged.as_deref());
        }

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .header(USER_AGENT, self.user_agent.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(%method, path, status = status.as_u16(), "Response received");

        if !status.is_success() {
            let err = ApiError::from_body(status.as_u16(), &bytes)?;
            return Err(err.into());
        }

        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call::<T, ()>(Method::GET, path, None).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, Some(body)).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PUT, path, body).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call::<T, ()>(Method::PATCH, path, None).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call::<T, ()>(Method::DELETE, path, None).await
    }
}

/// Trim an identifier and encode it as a single path segment.
///
/// Empty identifiers, and the dot segments `.` and `..`, are rejected.
pub(crate) fn require_id<'a>(id: &'a str, resource: &'static str) -> Result<Cow<'a, str>> {
    let id = id.trim();
    if id.is_empty() || id == "." || id == ".." {
        return Err(Error::MissingId(resource));
    }
    Ok(urlencoding::encode(id))
}

impl Clone for CommerceClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for CommerceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceClient")
            .field("environment", &self.inner.key.environment())
            .field("base_url", &self.inner.base_url.as_str())
            .field("debug", &self.is_debug())
            .field("config", &self.inner.config)
            .finish()
    }
}
