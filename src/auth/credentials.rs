//! API key and shared secret.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BAIDU_PUSH_API_KEY";
/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "BAIDU_PUSH_SECRET_KEY";

/// Credentials of one push application.
///
/// The API key is sent with every request. The secret key never leaves the
/// process; it only feeds the request signature.
///
/// # Example
///
/// ```
/// use baidupush_rs::Credentials;
///
/// let credentials = Credentials::new("api-key", "secret-key");
/// assert_eq!(credentials.api_key(), "api-key");
/// assert!(!format!("{:?}", credentials).contains("secret-key"));
/// ```
pub struct Credentials {
    api_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and secret key.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Read credentials from `BAIDU_PUSH_API_KEY` and `BAIDU_PUSH_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = read_env(API_KEY_ENV)?;
        let secret_key = read_env(SECRET_KEY_ENV)?;
        Ok(Self::new(api_key, secret_key))
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set", name))),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
