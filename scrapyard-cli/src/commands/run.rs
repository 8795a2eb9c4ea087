//! Options shared by every scrape command
//!
//! Decides between the realtime and the job endpoint, builds the request
//! context and prints whatever comes back.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use scrapyard_client::{CancellationToken, RequestContext};
use scrapyard_core::domain::ParseInstructions;
use scrapyard_core::dto::Resp;
use tracing::info;

use crate::output::print_resp;

/// Execution options common to all sources
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// JSON file with custom parsing instructions
    #[arg(long, value_name = "FILE")]
    pub parse_instructions: Option<PathBuf>,

    /// Submit as a job and poll for the result instead of waiting on the connection
    #[arg(long = "async")]
    pub use_async: bool,

    /// Seconds between job status checks (async only)
    #[arg(long, value_name = "SECS", requires = "use_async")]
    pub poll_interval: Option<u64>,

    /// Give up after this many seconds instead of the default timeout
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the normalized response as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Load the parsing instructions file, if one was given
    pub fn load_parse_instructions(&self) -> Result<Option<ParseInstructions>> {
        let Some(path) = &self.parse_instructions else {
            return Ok(None);
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
        let instructions = ParseInstructions::from_value(value)
            .with_context(|| format!("Invalid parsing instructions in {}", path.display()))?;

        Ok(Some(instructions))
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval.map(Duration::from_secs)
    }

    /// Context cancelled by Ctrl-C and bounded by `--timeout`, or by
    /// `default_timeout` when no timeout was given
    pub fn request_context(&self, default_timeout: Duration) -> RequestContext {
        let timeout = self.timeout.map(Duration::from_secs).unwrap_or(default_timeout);

        let token = CancellationToken::new();
        let watcher = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                watcher.cancel();
            }
        });

        RequestContext::with_token(token).timeout(timeout)
    }

    /// Print a response in the requested format
    pub fn report(&self, resp: &Resp) -> Result<()> {
        info!(pages = resp.results.len(), "Scrape finished");

        if self.json {
            let pretty =
                serde_json::to_string_pretty(resp).context("Failed to encode response")?;
            println!("{}", pretty);
        } else {
            print_resp(resp);
        }

        Ok(())
    }

    /// Announce the endpoint being used
    pub fn announce(&self, what: &str) {
        let mode = if self.use_async { "async job" } else { "realtime" };
        eprintln!("{} {} ({})", "→".cyan(), what.bold(), mode.dimmed());
    }
}
