//! Encoded raster payload codec.
//!
//! Snapshots travel to the recognition backend as base64-encoded PNG wrapped
//! in a data-URL. Inbound payloads may arrive with or without the canonical
//! prefix; both forms decode to the same bytes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::borrow::Cow;
use thiserror::Error;

/// Canonical prefix carried by exported snapshot payloads.
pub const PNG_PREFIX: &str = "data:image/png;base64,";

/// Errors that can occur while decoding an encoded raster payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Wraps PNG bytes into a prefixed payload string.
pub fn encode(png: &[u8]) -> String {
    format!("{PNG_PREFIX}{}", STANDARD.encode(png))
}

/// Ensures the canonical prefix is present, prepending it when absent.
pub fn normalize(payload: &str) -> Cow<'_, str> {
    if payload.contains(PNG_PREFIX) {
        Cow::Borrowed(payload)
    } else {
        Cow::Owned(format!("{PNG_PREFIX}{payload}"))
    }
}

/// Decodes a payload (prefixed or bare base64) into PNG bytes.
pub fn decode(payload: &str) -> Result<Vec<u8>, PayloadError> {
    let normalized = normalize(payload);
    let body = normalized
        .split_once(',')
        .map_or(normalized.as_ref(), |(_, body)| body);
    Ok(STANDARD.decode(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_carries_the_canonical_prefix() {
        let payload = encode(b"not-actually-png");
        assert!(payload.starts_with(PNG_PREFIX));
    }

    #[test]
    fn normalize_prepends_missing_prefix_only() {
        assert_eq!(normalize("QUJD"), format!("{PNG_PREFIX}QUJD"));

        let prefixed = format!("{PNG_PREFIX}QUJD");
        assert_eq!(normalize(&prefixed), prefixed);
    }

    #[test]
    fn prefixed_and_bare_payloads_decode_identically() {
        let bare = STANDARD.encode(b"raster bytes");
        let prefixed = format!("{PNG_PREFIX}{bare}");

        assert_eq!(decode(&bare).unwrap(), decode(&prefixed).unwrap());
        assert_eq!(decode(&bare).unwrap(), b"raster bytes");
    }

    #[test]
    fn garbage_payload_is_rejected() {
        assert!(decode("!!not base64!!").is_err());
    }
}
