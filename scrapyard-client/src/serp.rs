//! Synchronous (realtime) client
//!
//! One POST per request; the remote side holds the connection open until
//! the scrape is done.

use std::sync::Arc;

use reqwest::Method;
use scrapyard_core::domain::{YandexSearchOpts, YandexUrlOpts};
use scrapyard_core::dto::Resp;
use tracing::debug;

use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::Result;
use crate::normalize::normalize;
use crate::payload;
use crate::sources::{self, PreparedRequest};
use crate::transport::{HttpTransport, Transport};

/// Client for the realtime endpoint
#[derive(Clone)]
pub struct SerpClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl SerpClient {
    /// Create a client that talks HTTP with the configured credentials
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config));
        Ok(Self { config, transport })
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =============================================================================
    // Yandex
    // =============================================================================

    /// Scrape Yandex search results for `query`
    ///
    /// Uses the configured default timeout.
    pub async fn scrape_yandex_search(
        &self,
        query: &str,
        opts: Option<YandexSearchOpts>,
    ) -> Result<Resp> {
        let ctx = RequestContext::with_timeout(self.config.default_timeout);
        self.scrape_yandex_search_ctx(&ctx, query, opts).await
    }

    /// Scrape Yandex search results for `query` within `ctx`
    pub async fn scrape_yandex_search_ctx(
        &self,
        ctx: &RequestContext,
        query: &str,
        opts: Option<YandexSearchOpts>,
    ) -> Result<Resp> {
        let prepared = sources::yandex_search(query, opts)?;
        self.scrape(ctx, prepared).await
    }

    /// Scrape a Yandex `url`
    ///
    /// Uses the configured default timeout.
    pub async fn scrape_yandex_url(&self, url: &str, opts: Option<YandexUrlOpts>) -> Result<Resp> {
        let ctx = RequestContext::with_timeout(self.config.default_timeout);
        self.scrape_yandex_url_ctx(&ctx, url, opts).await
    }

    /// Scrape a Yandex `url` within `ctx`
    pub async fn scrape_yandex_url_ctx(
        &self,
        ctx: &RequestContext,
        url: &str,
        opts: Option<YandexUrlOpts>,
    ) -> Result<Resp> {
        let prepared = sources::yandex_url(url, opts)?;
        self.scrape(ctx, prepared).await
    }

    async fn scrape(&self, ctx: &RequestContext, prepared: PreparedRequest) -> Result<Resp> {
        let body = payload::build(&prepared.payload)?;
        let custom_parser = prepared.custom_parser();

        debug!(source = %prepared.payload.source(), "Sending realtime request");
        let raw = ctx
            .run(
                self.transport
                    .request(ctx, Method::POST, &self.config.realtime_url, Some(body)),
            )
            .await?;

        normalize(&raw, custom_parser, custom_parser)
    }
}

impl std::fmt::Debug for SerpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpClient")
            .field("realtime_url", &self.config.realtime_url)
            .finish_non_exhaustive()
    }
}
