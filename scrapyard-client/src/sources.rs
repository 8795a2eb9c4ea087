//! Per-source request preparation
//!
//! Defaults, validation and payload construction for each supported
//! source. Shared by the synchronous and asynchronous clients.

use std::time::Duration;

use scrapyard_core::domain::options::ScrapeOptions;
use scrapyard_core::domain::url::validate_url;
use scrapyard_core::domain::{YandexSearchOpts, YandexUrlOpts};
use scrapyard_core::dto::{Payload, YandexSearchPayload, YandexUrlPayload};

use crate::error::Result;

/// A validated request ready to be serialized
#[derive(Debug, Clone)]
pub(crate) struct PreparedRequest {
    pub payload: Payload,
    pub poll_interval: Option<Duration>,
}

impl PreparedRequest {
    /// Custom parsing instructions travel with the payload
    pub fn custom_parser(&self) -> bool {
        self.payload.has_parse_instructions()
    }
}

pub(crate) fn yandex_search(query: &str, opts: Option<YandexSearchOpts>) -> Result<PreparedRequest> {
    let opts = opts.unwrap_or_default();
    opts.validate()?;

    Ok(PreparedRequest {
        payload: YandexSearchPayload::new(query, &opts).into(),
        poll_interval: opts.poll_interval(),
    })
}

pub(crate) fn yandex_url(url: &str, opts: Option<YandexUrlOpts>) -> Result<PreparedRequest> {
    validate_url(url, "yandex")?;

    let opts = opts.unwrap_or_default();
    opts.validate()?;

    Ok(PreparedRequest {
        payload: YandexUrlPayload::new(url, &opts).into(),
        poll_interval: opts.poll_interval(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use scrapyard_core::ValidationError;
    use scrapyard_core::domain::Domain;

    #[test]
    fn test_search_uses_defaults_when_no_options() {
        let prepared = yandex_search("ferris", None).unwrap();
        match &prepared.payload {
            Payload::YandexSearch(p) => {
                assert_eq!(p.domain, Domain::Com);
                assert_eq!(p.limit, 10);
            }
            other => panic!("unexpected payload {:?}", other),
        }
        assert!(prepared.poll_interval.is_none());
        assert!(!prepared.custom_parser());
    }

    #[test]
    fn test_url_must_belong_to_yandex() {
        let err = yandex_url("https://example.com/", None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::ForeignHost(_))
        ));
    }

    #[test]
    fn test_poll_interval_is_carried() {
        let opts = YandexUrlOpts {
            poll_interval: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let prepared = yandex_url("https://yandex.ru/maps", Some(opts)).unwrap();
        assert_eq!(prepared.poll_interval, Some(Duration::from_secs(5)));
    }
}
