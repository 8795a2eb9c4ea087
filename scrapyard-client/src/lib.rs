//! Scrapyard HTTP Client
//!
//! Clients for a remote scraping service, in two flavours:
//!
//! - [`SerpClient`] sends a request to the realtime endpoint and waits for
//!   the response on the same connection.
//! - [`SerpClientAsync`] submits the request as a job, polls the job in a
//!   background task and hands the result over through a [`ScrapeHandle`].
//!
//! Every entry point comes in two forms: one that applies the configured
//! default timeout, and a `_ctx` form that takes a [`RequestContext`] so the
//! caller controls cancellation and deadlines.
//!
//! # Example
//!
//! ```no_run
//! use scrapyard_client::{ClientConfig, SerpClientAsync};
//! use scrapyard_core::domain::YandexSearchOpts;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SerpClientAsync::new(ClientConfig::new("user", "pass"))?;
//!
//!     let handle = client
//!         .scrape_yandex_search("rust async", Some(YandexSearchOpts::default()))
//!         .await?;
//!     let resp = handle.recv().await?;
//!
//!     println!("Got {} result page(s)", resp.results.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod jobs;
pub mod normalize;
pub mod payload;
pub mod poller;
mod serp;
mod serp_async;
mod sources;
pub mod transport;

// Re-export commonly used types
pub use config::ClientConfig;
pub use context::RequestContext;
pub use error::{ClientError, Result};
pub use jobs::JobClient;
pub use serp::SerpClient;
pub use serp_async::{ScrapeHandle, SerpClientAsync};
pub use transport::{HttpTransport, RawResponse, Transport};

// Re-exported so callers can build a `RequestContext` from their own token
pub use tokio_util::sync::CancellationToken;
