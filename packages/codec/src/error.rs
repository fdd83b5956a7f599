//! Error handling for the reversible codecs

use thiserror::Error;

/// Codec decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input is not a valid encoding: foreign characters, bad length, bad
    /// padding or malformed escape sequences
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Input decoded to bytes that are not valid UTF-8
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl DecodeError {
    /// Create an invalid format error
    #[must_use]
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create an invalid encoding error
    #[must_use]
    pub fn invalid_encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }
}

impl From<DecodeError> for devkit_common::Error {
    fn from(err: DecodeError) -> Self {
        devkit_common::Error::with_source(devkit_common::ErrorKind::Decode, err)
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, DecodeError>;
