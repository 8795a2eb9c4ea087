//! Asynchronous (polling) client
//!
//! A request is submitted as a job, polled in a background task until it
//! reaches a terminal state, and the normalized result is handed to the
//! caller through a [`ScrapeHandle`].
//!
//! The entry points either fail directly, with no handle and no task left
//! behind, or return a handle that yields exactly one value. Submission and
//! polling failures both surface as the direct error.

use std::sync::Arc;

use scrapyard_core::domain::{YandexSearchOpts, YandexUrlOpts};
use scrapyard_core::dto::Resp;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{ClientError, Result};
use crate::jobs::JobClient;
use crate::normalize::normalize;
use crate::payload;
use crate::poller::{self, effective_interval};
use crate::sources::{self, PreparedRequest};
use crate::transport::{HttpTransport, Transport};

/// Single-value handle to the outcome of an asynchronous scrape
#[derive(Debug)]
pub struct ScrapeHandle {
    rx: oneshot::Receiver<Result<Resp>>,
    forwarder: Option<JoinHandle<()>>,
}

impl ScrapeHandle {
    /// Forwards `outcome` from a task of its own
    fn forward(outcome: Result<Resp>) -> Self {
        let (tx, rx) = oneshot::channel();
        let forwarder = tokio::spawn(async move {
            if tx.send(outcome).is_err() {
                debug!("Result handle dropped before delivery");
            }
        });
        Self {
            rx,
            forwarder: Some(forwarder),
        }
    }

    /// Waits until the forwarding task has finished
    ///
    /// Once this returns the result is buffered in the handle and
    /// [`recv`](Self::recv) completes without waiting.
    pub async fn join(&mut self) {
        if let Some(forwarder) = self.forwarder.take() {
            if let Err(e) = forwarder.await {
                warn!("Result forwarder panicked: {}", e);
            }
        }
    }

    /// Waits for the result and joins the forwarding task
    pub async fn recv(mut self) -> Result<Resp> {
        self.join().await;
        self.rx
            .await
            .map_err(|_| ClientError::InternalError("result forwarder dropped".to_string()))?
    }
}

/// Client for the asynchronous job endpoint
#[derive(Debug, Clone)]
pub struct SerpClientAsync {
    config: ClientConfig,
    jobs: Arc<JobClient>,
}

impl SerpClientAsync {
    /// Create a client that talks HTTP with the configured credentials
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config));
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let jobs = Arc::new(JobClient::new(config.async_url.clone(), transport));
        Self { config, jobs }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Job endpoints used by this client
    pub fn jobs(&self) -> &JobClient {
        &self.jobs
    }

    // =============================================================================
    // Yandex
    // =============================================================================

    /// Scrape Yandex search results for `query`
    ///
    /// Uses the configured default timeout for submission and polling.
    pub async fn scrape_yandex_search(
        &self,
        query: &str,
        opts: Option<YandexSearchOpts>,
    ) -> Result<ScrapeHandle> {
        let ctx = RequestContext::with_timeout(self.config.default_timeout);
        self.scrape_yandex_search_ctx(&ctx, query, opts).await
    }

    /// Scrape Yandex search results for `query` within `ctx`
    pub async fn scrape_yandex_search_ctx(
        &self,
        ctx: &RequestContext,
        query: &str,
        opts: Option<YandexSearchOpts>,
    ) -> Result<ScrapeHandle> {
        let prepared = sources::yandex_search(query, opts)?;
        self.scrape(ctx, prepared).await
    }

    /// Scrape a Yandex `url`
    ///
    /// Uses the configured default timeout for submission and polling.
    pub async fn scrape_yandex_url(
        &self,
        url: &str,
        opts: Option<YandexUrlOpts>,
    ) -> Result<ScrapeHandle> {
        let ctx = RequestContext::with_timeout(self.config.default_timeout);
        self.scrape_yandex_url_ctx(&ctx, url, opts).await
    }

    /// Scrape a Yandex `url` within `ctx`
    pub async fn scrape_yandex_url_ctx(
        &self,
        ctx: &RequestContext,
        url: &str,
        opts: Option<YandexUrlOpts>,
    ) -> Result<ScrapeHandle> {
        let prepared = sources::yandex_url(url, opts)?;
        self.scrape(ctx, prepared).await
    }

    async fn scrape(&self, ctx: &RequestContext, prepared: PreparedRequest) -> Result<ScrapeHandle> {
        let body = payload::build(&prepared.payload)?;
        let custom_parser = prepared.custom_parser();

        // No task is started unless the remote side accepted the job.
        let job_id = self.jobs.submit_job(ctx, body).await?;

        let interval =
            effective_interval(prepared.poll_interval, self.config.default_poll_interval);
        let (sinks, receivers) = poller::sinks();

        // Dropping this call stops the poller with it.
        let poll_ctx = ctx.child();
        let _stop_poller = poll_ctx.token().clone().drop_guard();

        let poll_task = poller::start_polling(
            Arc::clone(&self.jobs),
            poll_ctx,
            job_id.clone(),
            interval,
            sinks,
        );

        let signal = receivers.error.await;
        if let Err(e) = poll_task.await {
            warn!(job_id = %job_id, "Poller task panicked: {}", e);
        }

        match signal {
            Ok(None) => {}
            Ok(Some(err)) => return Err(err),
            Err(_) => {
                return Err(ClientError::InternalError(format!(
                    "poller for job {} exited without a signal",
                    job_id
                )));
            }
        }

        let raw = receivers.result.await.map_err(|_| {
            ClientError::InternalError(format!("poller for job {} lost its result", job_id))
        })?;

        Ok(ScrapeHandle::forward(normalize(
            &raw,
            custom_parser,
            custom_parser,
        )))
    }
}
