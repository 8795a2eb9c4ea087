//! Per-source request options
//!
//! `Default` fills every option with the value the remote service would
//! pick itself; `validate` rejects anything the source does not accept.

use std::time::Duration;

use super::params::{Domain, Locale, Render, UserAgent};
use super::parse::ParseInstructions;
use crate::error::ValidationError;

/// First result page requested when none is given
pub const DEFAULT_START_PAGE: u32 = 1;

/// Number of result pages requested when none is given
pub const DEFAULT_PAGES: u32 = 1;

/// Results per page for search engine sources
pub const DEFAULT_LIMIT_SERP: u32 = 10;

/// Domains Yandex search can be scraped on
pub const YANDEX_SEARCH_DOMAINS: &[Domain] = &[
    Domain::Com,
    Domain::Ru,
    Domain::Ua,
    Domain::By,
    Domain::Kz,
    Domain::Tr,
];

/// Interface languages Yandex search understands
pub const YANDEX_SEARCH_LOCALES: &[Locale] = &[
    Locale::En,
    Locale::Ru,
    Locale::By,
    Locale::De,
    Locale::Fr,
    Locale::Id,
    Locale::Kk,
    Locale::Tt,
    Locale::Tr,
    Locale::Uk,
];

/// Behaviour every option struct shares with the client
pub trait ScrapeOptions {
    /// Check option values against what the source accepts
    fn validate(&self) -> Result<(), ValidationError>;

    /// Requested poll interval for the asynchronous client
    fn poll_interval(&self) -> Option<Duration>;
}

/// Options for the `yandex_search` source
#[derive(Debug, Clone, PartialEq)]
pub struct YandexSearchOpts {
    pub domain: Domain,
    pub start_page: u32,
    pub pages: u32,
    pub limit: u32,
    pub locale: Option<Locale>,
    pub geo_location: Option<String>,
    pub user_agent: UserAgent,
    pub callback_url: Option<String>,
    pub parse_instructions: Option<ParseInstructions>,
    /// Zero or unset means the client's default interval
    pub poll_interval: Option<Duration>,
}

impl Default for YandexSearchOpts {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            start_page: DEFAULT_START_PAGE,
            pages: DEFAULT_PAGES,
            limit: DEFAULT_LIMIT_SERP,
            locale: None,
            geo_location: None,
            user_agent: UserAgent::default(),
            callback_url: None,
            parse_instructions: None,
            poll_interval: None,
        }
    }
}

impl ScrapeOptions for YandexSearchOpts {
    fn validate(&self) -> Result<(), ValidationError> {
        if !YANDEX_SEARCH_DOMAINS.contains(&self.domain) {
            return Err(ValidationError::invalid("domain", self.domain));
        }

        if let Some(locale) = self.locale {
            if !YANDEX_SEARCH_LOCALES.contains(&locale) {
                return Err(ValidationError::invalid("locale", locale));
            }
        }

        if self.limit == 0 || self.pages == 0 || self.start_page == 0 {
            return Err(ValidationError::NonPositivePaging);
        }

        if let Some(instructions) = &self.parse_instructions {
            instructions.validate()?;
        }

        Ok(())
    }

    fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval
    }
}

/// Options for the `yandex` (URL) source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YandexUrlOpts {
    pub user_agent: UserAgent,
    pub render: Option<Render>,
    pub callback_url: Option<String>,
    pub parse_instructions: Option<ParseInstructions>,
    /// Zero or unset means the client's default interval
    pub poll_interval: Option<Duration>,
}

impl ScrapeOptions for YandexUrlOpts {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(instructions) = &self.parse_instructions {
            instructions.validate()?;
        }

        Ok(())
    }

    fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval
    }
}
