//! Primitive types for authenticating against the API.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::{Error, Result};

const LIVE_KEY_PREFIX: &str = "live_";
const TEST_KEY_PREFIX: &str = "test_";

/// A validated Busha Commerce secret key.
///
/// Keys must be non-empty and start with `live_` or `test_`. The prefix
/// decides the [`Environment`]. The raw value is never printed by `Debug`.
///
/// # Example
///
/// ```
/// use busha_commerce::{Environment, SecretKey};
///
/// let key = SecretKey::new("test_abc123").expect("valid key");
/// assert_eq!(key.environment(), Environment::Test);
///
/// assert!(SecretKey::new("").is_err());
/// assert!(SecretKey::new("sk_abc123").is_err());
/// ```
#[derive(Debug)]
pub struct SecretKey {
    value: SecretString,
    env: Environment,
}

impl SecretKey {
    /// Validate and wrap a secret key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is empty or has an
    /// unrecognized prefix.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidKey("secret key cannot be empty".to_string()));
        }

        let env = if key.starts_with(LIVE_KEY_PREFIX) {
            Environment::Live
        } else if key.starts_with(TEST_KEY_PREFIX) {
            Environment::Test
        } else {
            return Err(Error::InvalidKey(format!(
                "secret key must start with `{LIVE_KEY_PREFIX}` or `{TEST_KEY_PREFIX}`"
            )));
        };

        Ok(Self {
            value: SecretString::from(key),
            env,
        })
    }

    /// The environment the key belongs to.
    pub fn environment(&self) -> Environment {
        self.env
    }

    pub(crate) fn expose(&self) -> &str {
        self.value.expose_secret()
    }
}

/// The environment a secret key targets.
///
/// Both environments share one API host; the key itself selects whether
/// the account is live or sandboxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live key; real payments.
    Live,
    /// Test key; sandboxed payments.
    Test,
}

impl Environment {
    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Live => write!(f, "live"),
            Environment::Test => write!(f, "test"),
        }
    }
}
