//! Base64 codec over UTF-8 text
//!
//! Encoding interprets the input as UTF-8 bytes; decoding is strict about the
//! alphabet and padding and refuses byte sequences that are not UTF-8 instead
//! of substituting replacement characters.

use crate::error::{DecodeError, Result};
use crate::TextCodec;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine as _};

/// URL-safe alphabet, unpadded on encode, padding optional on decode
static URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 alphabet variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base64Variant {
    /// `A–Z a–z 0–9 + /` with `=` padding
    #[default]
    Standard,
    /// `-` and `_` instead of `+` and `/`, no padding
    UrlSafe,
}

impl Base64Variant {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE_LENIENT,
        }
    }
}

/// Encode text as standard, padded Base64
#[must_use]
pub fn encode(text: &str) -> String {
    encode_with(Base64Variant::Standard, text)
}

/// Decode standard Base64 back into text
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for characters outside the alphabet or
/// incorrect length/padding, and `DecodeError::InvalidEncoding` when the
/// decoded bytes are not UTF-8.
pub fn decode(text: &str) -> Result<String> {
    decode_with(Base64Variant::Standard, text)
}

/// Encode text with the given alphabet variant
#[must_use]
pub fn encode_with(variant: Base64Variant, text: &str) -> String {
    variant.engine().encode(text.as_bytes())
}

/// Decode text with the given alphabet variant
///
/// ASCII whitespace is ignored, so wrapped lines and trailing newlines decode.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_with(variant: Base64Variant, text: &str) -> Result<String> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = variant.engine().decode(compact.as_bytes()).map_err(|e| {
        tracing::debug!(?variant, error = %e, "rejected base64 input");
        DecodeError::invalid_format(e.to_string())
    })?;

    String::from_utf8(bytes).map_err(|e| {
        tracing::debug!(?variant, "base64 payload is not UTF-8");
        DecodeError::invalid_encoding(e.to_string())
    })
}

/// Base64 codec bound to one alphabet variant
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec {
    variant: Base64Variant,
}

impl Base64Codec {
    /// Create a codec for the given variant
    #[must_use]
    pub fn new(variant: Base64Variant) -> Self {
        Self { variant }
    }

    /// The alphabet this codec uses
    #[must_use]
    pub fn variant(&self) -> Base64Variant {
        self.variant
    }
}

impl TextCodec for Base64Codec {
    fn name(&self) -> &'static str {
        match self.variant {
            Base64Variant::Standard => "base64",
            Base64Variant::UrlSafe => "base64url",
        }
    }

    fn encode(&self, text: &str) -> String {
        encode_with(self.variant, text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        decode_with(self.variant, text)
    }
}
