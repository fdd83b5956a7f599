//! The decoded token and its derived temporal state

use crate::claims::{ClaimValue, Claims};
use chrono::{DateTime, Utc};

/// User-facing caveat attached to every decoded token
pub const VERIFICATION_CAVEAT: &str =
    "The signature has not been verified. Verifying it requires the issuer's trusted key.";

/// Header, payload and signature of a structurally valid token.
///
/// Temporal flags are evaluated once, at decode time, against the instant
/// passed to [`crate::decode_at`] (or the wall clock for [`crate::decode`]).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub(crate) header: Claims,
    pub(crate) payload: Claims,
    pub(crate) raw_header: String,
    pub(crate) raw_payload: String,
    pub(crate) signature: String,
    pub(crate) is_expired: bool,
    pub(crate) is_not_yet_valid: bool,
}

impl DecodedToken {
    /// Decoded header parameters
    #[must_use]
    pub fn header(&self) -> &Claims {
        &self.header
    }

    /// Decoded payload claims
    #[must_use]
    pub fn payload(&self) -> &Claims {
        &self.payload
    }

    /// Signature segment, verbatim and unverified
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The three encoded segments as they appeared in the input
    #[must_use]
    pub fn raw_segments(&self) -> [&str; 3] {
        [&self.raw_header, &self.raw_payload, &self.signature]
    }

    /// `now >= exp`; a token without a numeric `exp` never expires
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired
    }

    /// `now < nbf`; false without a numeric `nbf`
    #[must_use]
    pub fn is_not_yet_valid(&self) -> bool {
        self.is_not_yet_valid
    }

    /// Signing algorithm named by the header (`alg`)
    #[must_use]
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get("alg").and_then(ClaimValue::as_str)
    }

    /// Token type named by the header (`typ`)
    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.header.get("typ").and_then(ClaimValue::as_str)
    }

    /// Key identifier named by the header (`kid`)
    #[must_use]
    pub fn key_id(&self) -> Option<&str> {
        self.header.get("kid").and_then(ClaimValue::as_str)
    }

    /// Expiry as a UTC instant
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.payload.expiration().and_then(to_datetime)
    }

    /// Issue time as a UTC instant
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.payload.issued_at().and_then(to_datetime)
    }

    /// Start of validity as a UTC instant
    #[must_use]
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.payload.not_before().and_then(to_datetime)
    }

    /// Pretty-printed header JSON
    #[must_use]
    pub fn header_json(&self) -> String {
        format!("{:#}", self.header.to_json())
    }

    /// Pretty-printed payload JSON
    #[must_use]
    pub fn payload_json(&self) -> String {
        format!("{:#}", self.payload.to_json())
    }

    /// See [`VERIFICATION_CAVEAT`]
    #[must_use]
    pub fn verification_caveat(&self) -> &'static str {
        VERIFICATION_CAVEAT
    }
}

pub(crate) fn expired_at(payload: &Claims, now: DateTime<Utc>) -> bool {
    let now_ms = now.timestamp_millis() as f64;
    payload.expiration().is_some_and(|exp| now_ms >= exp * 1000.0)
}

pub(crate) fn premature_at(payload: &Claims, now: DateTime<Utc>) -> bool {
    let now_ms = now.timestamp_millis() as f64;
    payload.not_before().is_some_and(|nbf| now_ms < nbf * 1000.0)
}

fn to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    let millis = seconds * 1000.0;
    if !(i64::MIN as f64..=i64::MAX as f64).contains(&millis) {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}
