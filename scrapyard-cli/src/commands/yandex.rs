//! Yandex command handlers
//!
//! Builds source options from the command line and runs them through the
//! realtime or the asynchronous client.

use anyhow::{Context, Result};
use clap::Args;
use scrapyard_client::{SerpClient, SerpClientAsync};
use scrapyard_core::domain::options::{DEFAULT_LIMIT_SERP, DEFAULT_PAGES, DEFAULT_START_PAGE};
use scrapyard_core::domain::{Domain, Locale, Render, UserAgent, YandexSearchOpts, YandexUrlOpts};

use super::RunArgs;
use crate::config::Config;

/// Arguments for `yandex-search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Yandex domain (com, ru, ua, by, kz, tr)
    #[arg(long, default_value_t = Domain::Com)]
    pub domain: Domain,

    /// First result page
    #[arg(long, default_value_t = DEFAULT_START_PAGE)]
    pub start_page: u32,

    /// Number of result pages
    #[arg(long, default_value_t = DEFAULT_PAGES)]
    pub pages: u32,

    /// Results per page
    #[arg(long, default_value_t = DEFAULT_LIMIT_SERP)]
    pub limit: u32,

    /// Interface language
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Geographical location of the search
    #[arg(long)]
    pub geo_location: Option<String>,

    /// Device type to impersonate
    #[arg(long, default_value_t = UserAgent::Desktop)]
    pub user_agent: UserAgent,

    /// URL notified when the job is done
    #[arg(long)]
    pub callback_url: Option<String>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for `yandex-url`
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Page URL on a Yandex host
    pub url: String,

    /// Device type to impersonate
    #[arg(long, default_value_t = UserAgent::Desktop)]
    pub user_agent: UserAgent,

    /// JavaScript rendering mode (html, png)
    #[arg(long)]
    pub render: Option<Render>,

    /// URL notified when the job is done
    #[arg(long)]
    pub callback_url: Option<String>,

    #[command(flatten)]
    pub run: RunArgs,
}

impl SearchArgs {
    fn opts(&self) -> Result<YandexSearchOpts> {
        Ok(YandexSearchOpts {
            domain: self.domain,
            start_page: self.start_page,
            pages: self.pages,
            limit: self.limit,
            locale: self.locale,
            geo_location: self.geo_location.clone(),
            user_agent: self.user_agent,
            callback_url: self.callback_url.clone(),
            parse_instructions: self.run.load_parse_instructions()?,
            poll_interval: self.run.poll_interval(),
        })
    }
}

impl UrlArgs {
    fn opts(&self) -> Result<YandexUrlOpts> {
        Ok(YandexUrlOpts {
            user_agent: self.user_agent,
            render: self.render,
            callback_url: self.callback_url.clone(),
            parse_instructions: self.run.load_parse_instructions()?,
            poll_interval: self.run.poll_interval(),
        })
    }
}

/// Handle `yandex-search`
pub async fn handle_search(args: SearchArgs, config: &Config) -> Result<()> {
    let opts = args.opts()?;
    let client_config = config.client_config();
    let ctx = args.run.request_context(client_config.default_timeout);
    args.run.announce(&format!("yandex_search \"{}\"", args.query));

    let resp = if args.run.use_async {
        let client = SerpClientAsync::new(client_config)?;
        let handle = client
            .scrape_yandex_search_ctx(&ctx, &args.query, Some(opts))
            .await
            .context("Async Yandex search failed")?;
        handle.recv().await?
    } else {
        let client = SerpClient::new(client_config)?;
        client
            .scrape_yandex_search_ctx(&ctx, &args.query, Some(opts))
            .await
            .context("Yandex search failed")?
    };

    args.run.report(&resp)
}

/// Handle `yandex-url`
pub async fn handle_url(args: UrlArgs, config: &Config) -> Result<()> {
    let opts = args.opts()?;
    let client_config = config.client_config();
    let ctx = args.run.request_context(client_config.default_timeout);
    args.run.announce(&format!("yandex {}", args.url));

    let resp = if args.run.use_async {
        let client = SerpClientAsync::new(client_config)?;
        let handle = client
            .scrape_yandex_url_ctx(&ctx, &args.url, Some(opts))
            .await
            .context("Async Yandex URL scrape failed")?;
        handle.recv().await?
    } else {
        let client = SerpClient::new(client_config)?;
        client
            .scrape_yandex_url_ctx(&ctx, &args.url, Some(opts))
            .await
            .context("Yandex URL scrape failed")?
    };

    args.run.report(&resp)
}
