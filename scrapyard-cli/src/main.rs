//! Scrapyard CLI
//!
//! Command-line interface for scraping through the remote service, using
//! either the realtime endpoint or the asynchronous job endpoint.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scrapyard")]
#[command(about = "Scrape search engines and pages through a remote scraping API", long_about = None)]
struct Cli {
    /// API username
    #[arg(long, env = "OXYLABS_USERNAME")]
    username: String,

    /// API password
    #[arg(long, env = "OXYLABS_PASSWORD", hide_env_values = true)]
    password: String,

    /// Realtime endpoint
    #[arg(
        long,
        env = "SCRAPYARD_REALTIME_URL",
        default_value = scrapyard_client::config::DEFAULT_REALTIME_URL
    )]
    realtime_url: String,

    /// Asynchronous job endpoint
    #[arg(
        long,
        env = "SCRAPYARD_ASYNC_URL",
        default_value = scrapyard_client::config::DEFAULT_ASYNC_URL
    )]
    async_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrapyard_cli=info,scrapyard_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        username: cli.username,
        password: cli.password,
        realtime_url: cli.realtime_url,
        async_url: cli.async_url,
    };

    handle_command(cli.command, &config).await
}
