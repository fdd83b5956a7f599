//! Token decoding errors

use std::fmt;

/// Result alias for token decoding
pub type Result<T> = std::result::Result<T, TokenError>;

/// Which encoded segment failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// First segment
    Header,
    /// Second segment
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
        }
    }
}

/// Structural token decoding failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token does not have exactly three dot-separated segments
    #[error("Malformed token: expected 3 dot-separated segments, found {segments}")]
    MalformedStructure {
        /// Number of segments actually present
        segments: usize,
    },
    /// A segment is not base64url-encoded JSON object data
    #[error("Invalid token {segment}: {reason}")]
    InvalidSegment {
        /// Offending segment
        segment: Segment,
        /// Decoder or parser diagnostic
        reason: String,
    },
}

impl TokenError {
    pub(crate) fn invalid_segment(segment: Segment, reason: impl Into<String>) -> Self {
        TokenError::InvalidSegment {
            segment,
            reason: reason.into(),
        }
    }
}

impl From<TokenError> for devkit_common::Error {
    fn from(err: TokenError) -> Self {
        devkit_common::Error::with_source(devkit_common::ErrorKind::Token, err)
    }
}
