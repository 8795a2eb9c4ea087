//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod run;
mod yandex;

pub use run::RunArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scrape Yandex search results for a query
    YandexSearch(yandex::SearchArgs),
    /// Scrape a page on a Yandex host
    YandexUrl(yandex::UrlArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::YandexSearch(args) => yandex::handle_search(args, config).await,
        Commands::YandexUrl(args) => yandex::handle_url(args, config).await,
    }
}
