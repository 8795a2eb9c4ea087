//! Payload builder
//!
//! Serializes a typed payload into the JSON body the remote service expects.

use scrapyard_core::dto::Payload;

use crate::error::Result;

/// Serializes `payload` to a JSON request body
pub fn build(payload: &Payload) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(payload)?)
}
