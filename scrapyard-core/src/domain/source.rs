//! Scrape sources
//!
//! A source tells the remote service which scraper to run for a request.

use serde::{Deserialize, Serialize};

/// Scraper selected on the remote side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Yandex search results for a query
    #[serde(rename = "yandex_search")]
    YandexSearch,

    /// Any page on a Yandex host
    #[serde(rename = "yandex")]
    YandexUrl,
}

impl Source {
    /// Wire identifier of the source
    pub fn as_str(self) -> &'static str {
        match self {
            Source::YandexSearch => "yandex_search",
            Source::YandexUrl => "yandex",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
