//! Request payloads
//!
//! One strongly typed payload per request shape. `parse: true` is set
//! whenever parsing instructions are attached, on every code path.

use serde::Serialize;

use crate::domain::options::{YandexSearchOpts, YandexUrlOpts};
use crate::domain::params::{Domain, Locale, Render, UserAgent};
use crate::domain::parse::ParseInstructions;
use crate::domain::source::Source;

/// Parsing flags shared by every payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parsing {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub parse: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsing_instructions: Option<ParseInstructions>,
}

impl Parsing {
    fn from_instructions(instructions: Option<&ParseInstructions>) -> Self {
        Self {
            parse: instructions.is_some(),
            parsing_instructions: instructions.cloned(),
        }
    }
}

/// Payload for the `yandex_search` source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YandexSearchPayload {
    pub source: Source,
    pub domain: Domain,
    pub query: String,
    pub start_page: u32,
    pub pages: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<String>,
    pub user_agent_type: UserAgent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(flatten)]
    pub parsing: Parsing,
}

impl YandexSearchPayload {
    pub fn new(query: impl Into<String>, opts: &YandexSearchOpts) -> Self {
        Self {
            source: Source::YandexSearch,
            domain: opts.domain,
            query: query.into(),
            start_page: opts.start_page,
            pages: opts.pages,
            limit: opts.limit,
            locale: opts.locale,
            geo_location: opts.geo_location.clone(),
            user_agent_type: opts.user_agent,
            callback_url: opts.callback_url.clone(),
            parsing: Parsing::from_instructions(opts.parse_instructions.as_ref()),
        }
    }
}

/// Payload for the `yandex` URL source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YandexUrlPayload {
    pub source: Source,
    pub url: String,
    pub user_agent_type: UserAgent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<Render>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(flatten)]
    pub parsing: Parsing,
}

impl YandexUrlPayload {
    pub fn new(url: impl Into<String>, opts: &YandexUrlOpts) -> Self {
        Self {
            source: Source::YandexUrl,
            url: url.into(),
            user_agent_type: opts.user_agent,
            render: opts.render,
            callback_url: opts.callback_url.clone(),
            parsing: Parsing::from_instructions(opts.parse_instructions.as_ref()),
        }
    }
}

/// Any request payload the client can submit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    YandexSearch(YandexSearchPayload),
    YandexUrl(YandexUrlPayload),
}

impl Payload {
    pub fn source(&self) -> Source {
        match self {
            Payload::YandexSearch(p) => p.source,
            Payload::YandexUrl(p) => p.source,
        }
    }

    /// True when custom parsing instructions travel with the request
    pub fn has_parse_instructions(&self) -> bool {
        self.parsing().parsing_instructions.is_some()
    }

    fn parsing(&self) -> &Parsing {
        match self {
            Payload::YandexSearch(p) => &p.parsing,
            Payload::YandexUrl(p) => &p.parsing,
        }
    }
}

impl From<YandexSearchPayload> for Payload {
    fn from(payload: YandexSearchPayload) -> Self {
        Payload::YandexSearch(payload)
    }
}

impl From<YandexUrlPayload> for Payload {
    fn from(payload: YandexUrlPayload) -> Self {
        Payload::YandexUrl(payload)
    }
}
