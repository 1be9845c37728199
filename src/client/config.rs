//! Channel configuration options.

use std::time::Duration;

/// Production host of the push service.
pub const DEFAULT_HOST: &str = "api.tuisong.baidu.com";

/// Environment variable overriding the service host.
pub const HOST_ENV: &str = "BAIDU_PUSH_HOST";

/// Name and version reported in the client identification header.
pub const SDK_NAME_VERSION: &str = concat!("Rust Baidu Push Service SDK v", env!("CARGO_PKG_VERSION"));

/// Content type of every request.
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

/// Configuration for a [`Channel`](crate::Channel).
///
/// # Example
///
/// ```
/// use baidupush_rs::ChannelConfig;
/// use std::time::Duration;
///
/// let config = ChannelConfig::default()
///     .with_host("127.0.0.1:8080")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Host (and optional port) of the push service
    pub host: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user_agent: format!(
                "BCCS_SDK/3.0 ({}) rust ({}) cli/Unknown",
                std::env::consts::OS,
                SDK_NAME_VERSION
            ),
            timeout: None,
        }
    }
}

impl ChannelConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration, with the host taken from `BAIDU_PUSH_HOST`
    /// when that variable is set.
    pub fn from_env() -> Self {
        match std::env::var(HOST_ENV) {
            Ok(host) if !host.is_empty() => Self::default().with_host(host),
            _ => Self::default(),
        }
    }

    /// Set the service host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
