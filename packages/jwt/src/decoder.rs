//! Splitting and segment decoding

use crate::claims::Claims;
use crate::error::{Result, Segment, TokenError};
use crate::token::{expired_at, premature_at, DecodedToken};
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine as _};
use chrono::{DateTime, Utc};
use devkit_common::is_idle;

/// Standard alphabet, padding optional. Base64url input is mapped onto it first.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a token, evaluating temporal claims against the wall clock.
///
/// Returns `Ok(None)` for empty or whitespace-only input.
///
/// # Errors
///
/// [`TokenError::MalformedStructure`] unless there are exactly three
/// segments, [`TokenError::InvalidSegment`] when the header or payload is
/// not base64url-encoded JSON object data.
pub fn decode(token: &str) -> Result<Option<DecodedToken>> {
    decode_at(token, Utc::now())
}

/// Decode a token, evaluating temporal claims against `now`.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_at(token: &str, now: DateTime<Utc>) -> Result<Option<DecodedToken>> {
    if is_idle(token) {
        return Ok(None);
    }

    let segments: Vec<&str> = token.trim().split('.').collect();
    let [raw_header, raw_payload, signature] = segments.as_slice() else {
        tracing::debug!(segments = segments.len(), "rejected malformed token");
        return Err(TokenError::MalformedStructure {
            segments: segments.len(),
        });
    };

    let header = decode_segment(Segment::Header, raw_header)?;
    let payload = decode_segment(Segment::Payload, raw_payload)?;

    let is_expired = expired_at(&payload, now);
    let is_not_yet_valid = premature_at(&payload, now);
    tracing::debug!(
        claims = payload.len(),
        is_expired,
        is_not_yet_valid,
        "decoded token"
    );

    Ok(Some(DecodedToken {
        header,
        payload,
        raw_header: (*raw_header).to_string(),
        raw_payload: (*raw_payload).to_string(),
        signature: (*signature).to_string(),
        is_expired,
        is_not_yet_valid,
    }))
}

fn decode_segment(segment: Segment, encoded: &str) -> Result<Claims> {
    let standard: String = encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = SEGMENT_ENGINE
        .decode(standard)
        .map_err(|e| TokenError::invalid_segment(segment, e.to_string()))?;

    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(serde_json::Value::Object(object)) => Ok(Claims::from_object(object)),
        Ok(_) => Err(TokenError::invalid_segment(segment, "expected a JSON object")),
        Err(e) => Err(TokenError::invalid_segment(segment, e.to_string())),
    }
}
