//! Result normalizer
//!
//! Turns a raw HTTP exchange into the caller-facing [`Resp`].

use scrapyard_core::dto::Resp;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::RawResponse;

/// Decodes a raw response into a [`Resp`]
///
/// # Arguments
/// * `raw` - Status and body as returned by the transport
/// * `parse` - The request asked the remote side for parsed content
/// * `custom_parser` - The request carried custom parsing instructions
///
/// Parsed content sometimes arrives as a JSON document encoded in a string;
/// when parsing was requested such strings are decoded in place.
pub fn normalize(raw: &RawResponse, parse: bool, custom_parser: bool) -> Result<Resp> {
    if !raw.is_success() {
        return Err(ClientError::api_error(raw.status, raw.text()));
    }

    let mut resp: Resp = serde_json::from_slice(&raw.body)
        .map_err(|e| ClientError::Serialization(format!("Failed to parse response: {}", e)))?;

    if parse || custom_parser {
        for result in &mut resp.results {
            if let Value::String(text) = &result.content {
                if let Ok(decoded @ (Value::Object(_) | Value::Array(_))) =
                    serde_json::from_str::<Value>(text)
                {
                    result.content = decoded;
                }
            }
        }
    }

    resp.custom_parser = custom_parser;
    Ok(resp)
}
