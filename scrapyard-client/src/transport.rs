//! Transport layer
//!
//! The single capability the clients need from the network: send a body to
//! a URL with a method and hand back the raw status and bytes. Retries,
//! connection pooling and TLS belong to the implementation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::debug;

use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{ClientError, Result};

/// Status and body of an HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx status codes
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Network capability consumed by the clients
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one request
    ///
    /// # Arguments
    /// * `ctx` - Cancellation scope; the request must not outlive it
    /// * `method` - HTTP method
    /// * `url` - Absolute request URL
    /// * `body` - Serialized JSON body, if any
    async fn request(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse>;
}

/// reqwest-backed transport with HTTP basic authentication
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    username: String,
    password: String,
}

impl HttpTransport {
    /// Creates a transport with a default reqwest client
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a transport around a preconfigured reqwest client
    ///
    /// This allows you to configure proxies, TLS settings, connection pools, etc.
    pub fn with_client(config: &ClientConfig, client: Client) -> Self {
        Self {
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        debug!(%method, url, "Sending request");

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password));

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        ctx.run(async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, ClientError>(RawResponse::new(status, body.to_vec()))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, Vec::new()).is_success());
        assert!(!RawResponse::new(401, "unauthorized").is_success());
        assert!(!RawResponse::new(500, "boom").is_success());
    }

    #[test]
    fn test_raw_response_text_is_lossy() {
        let raw = RawResponse::new(200, vec![b'o', b'k', 0xff]);
        assert_eq!(raw.text(), "ok\u{fffd}");
    }

    #[tokio::test]
    async fn test_cancelled_context_short_circuits() {
        let transport = HttpTransport::new(&ClientConfig::new("user", "pass"));
        let ctx = RequestContext::background();
        ctx.cancel();

        let err = transport
            .request(&ctx, Method::GET, "http://127.0.0.1:9/unreachable", None)
            .await
            .unwrap_err();
        assert!(err.is_cancellation());
    }
}
