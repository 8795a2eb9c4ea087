//! Target URL validation

use ::url::Url;

use crate::error::ValidationError;

/// Checks that `input` is an absolute URL whose host contains `host`.
///
/// Only the host is inspected, so `https://yandex.ru/...` and
/// `https://www.yandex.com.tr/...` both belong to `yandex`.
pub fn validate_url(input: &str, host: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let parsed = Url::parse(input).map_err(|e| match e {
        ::url::ParseError::RelativeUrlWithoutBase => ValidationError::MissingScheme,
        ::url::ParseError::EmptyHost => ValidationError::MissingHost,
        other => ValidationError::MalformedUrl(other.to_string()),
    })?;

    if parsed.scheme().is_empty() {
        return Err(ValidationError::MissingScheme);
    }

    let parsed_host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(ValidationError::MissingHost),
    };

    if !parsed_host.contains(host) {
        return Err(ValidationError::ForeignHost(host.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_yandex_urls() {
        assert!(validate_url("https://yandex.ru/search/?text=rust", "yandex").is_ok());
        assert!(validate_url("https://www.yandex.com.tr/", "yandex").is_ok());
    }

    #[test]
    fn test_rejects_empty_url() {
        assert_eq!(validate_url("", "yandex"), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        assert_eq!(
            validate_url("yandex.ru/search", "yandex"),
            Err(ValidationError::MissingScheme)
        );
    }

    #[test]
    fn test_rejects_url_without_host() {
        assert_eq!(
            validate_url("mailto:someone", "yandex"),
            Err(ValidationError::MissingHost)
        );
    }

    #[test]
    fn test_rejects_foreign_host() {
        assert_eq!(
            validate_url("https://example.com/yandex", "yandex"),
            Err(ValidationError::ForeignHost("yandex".to_string()))
        );
    }
}
