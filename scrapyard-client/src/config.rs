//! Client configuration
//!
//! Endpoints, credentials and the default timings used by both clients.
//! Defaults are plain fields so a test can shrink them per instance.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Realtime (synchronous) query endpoint
pub const DEFAULT_REALTIME_URL: &str = "https://realtime.oxylabs.io/v1/queries";

/// Asynchronous job endpoint
pub const DEFAULT_ASYNC_URL: &str = "https://data.oxylabs.io/v1/queries";

/// Deadline applied by entry points that do not take a context
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(50);

/// Poll interval recommended by the remote service
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API username
    pub username: String,

    /// API password
    pub password: String,

    /// Realtime endpoint used by the synchronous client
    pub realtime_url: String,

    /// Job endpoint used by the asynchronous client
    pub async_url: String,

    /// Deadline for entry points without a caller context
    pub default_timeout: Duration,

    /// Poll interval used when a request does not set a positive one
    pub default_poll_interval: Duration,
}

impl ClientConfig {
    /// Creates a configuration with default endpoints and timings
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            realtime_url: DEFAULT_REALTIME_URL.to_string(),
            async_url: DEFAULT_ASYNC_URL.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
            default_poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - OXYLABS_USERNAME (required)
    /// - OXYLABS_PASSWORD (required)
    /// - SCRAPYARD_REALTIME_URL (optional)
    /// - SCRAPYARD_ASYNC_URL (optional)
    /// - SCRAPYARD_TIMEOUT (optional, seconds, default: 50)
    /// - SCRAPYARD_POLL_INTERVAL (optional, seconds, default: 2)
    pub fn from_env() -> Result<Self> {
        let username = std::env::var("OXYLABS_USERNAME").map_err(|_| {
            ClientError::InvalidConfig("OXYLABS_USERNAME environment variable not set".into())
        })?;

        let password = std::env::var("OXYLABS_PASSWORD").map_err(|_| {
            ClientError::InvalidConfig("OXYLABS_PASSWORD environment variable not set".into())
        })?;

        let mut config = Self::new(username, password);

        if let Ok(url) = std::env::var("SCRAPYARD_REALTIME_URL") {
            config.realtime_url = url;
        }

        if let Ok(url) = std::env::var("SCRAPYARD_ASYNC_URL") {
            config.async_url = url;
        }

        if let Some(timeout) = env_secs("SCRAPYARD_TIMEOUT") {
            config.default_timeout = timeout;
        }

        if let Some(interval) = env_secs("SCRAPYARD_POLL_INTERVAL") {
            config.default_poll_interval = interval;
        }

        Ok(config)
    }

    pub fn with_realtime_url(mut self, url: impl Into<String>) -> Self {
        self.realtime_url = url.into();
        self
    }

    pub fn with_async_url(mut self, url: impl Into<String>) -> Self {
        self.async_url = url.into();
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_default_poll_interval(mut self, interval: Duration) -> Self {
        self.default_poll_interval = interval;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(ClientError::InvalidConfig("username cannot be empty".into()));
        }

        if self.password.is_empty() {
            return Err(ClientError::InvalidConfig("password cannot be empty".into()));
        }

        for (name, url) in [
            ("realtime_url", &self.realtime_url),
            ("async_url", &self.async_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ClientError::InvalidConfig(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.default_timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "default_timeout must be greater than 0".into(),
            ));
        }

        if self.default_poll_interval.is_zero() {
            return Err(ClientError::InvalidConfig(
                "default_poll_interval must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("realtime_url", &self.realtime_url)
            .field("async_url", &self.async_url)
            .field("default_timeout", &self.default_timeout)
            .field("default_poll_interval", &self.default_poll_interval)
            .finish()
    }
}

fn env_secs(name: &str) -> Option<Duration> {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}
