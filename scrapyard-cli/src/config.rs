//! Configuration module
//!
//! Handles CLI configuration: credentials and endpoints.

use scrapyard_client::ClientConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API username
    pub username: String,
    /// API password
    pub password: String,
    /// Realtime endpoint
    pub realtime_url: String,
    /// Asynchronous job endpoint
    pub async_url: String,
}

impl Config {
    /// Client configuration with the CLI's endpoints and default timings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.username, &self.password)
            .with_realtime_url(&self.realtime_url)
            .with_async_url(&self.async_url)
    }
}
