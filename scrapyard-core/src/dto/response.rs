//! Normalized response returned to callers

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::job::Job;

/// Response of a completed scrape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resp {
    #[serde(default)]
    pub results: Vec<ScrapeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    /// Set when custom parsing instructions produced the content
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub custom_parser: bool,
}

/// One scraped page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Raw HTML as a string, or structured content when parsing was requested
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_type: Option<String>,
}

impl ScrapeResult {
    /// Content as text when the page was returned unparsed
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_str()
    }
}
