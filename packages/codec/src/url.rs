//! URL component codec
//!
//! Escapes everything outside `A–Z a–z 0–9 - _ . ~ ! * ' ( )`, the same set a
//! URI-component encoder leaves alone. Reserved characters such as `/`, `:`,
//! `?` and `&` are escaped.

use crate::TextCodec;
use crate::error::{DecodeError, Result};

/// Sub-delimiters that `urlencoding` escapes but a URI-component encoder keeps
const COMPONENT_LITERALS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// Percent-encode text as a URI component
#[must_use]
pub fn encode(text: &str) -> String {
    let mut encoded = urlencoding::encode(text).into_owned();
    // Every `%` in the output starts an escape triple, so these can't overlap
    for (escape, literal) in COMPONENT_LITERALS {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, literal);
        }
    }
    encoded
}

/// Reverse percent-escapes
///
/// `+` is a literal plus sign; only `%XX` escapes are decoded.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` when a `%` is not followed by two hex
/// digits or when the unescaped bytes are not UTF-8.
pub fn decode(text: &str) -> Result<String> {
    check_escapes(text)?;

    urlencoding::decode(text)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| {
            tracing::debug!("percent-decoded bytes are not UTF-8");
            DecodeError::invalid_format(format!("escaped bytes are not valid UTF-8: {e}"))
        })
}

/// Reject `%` sequences that are not followed by two hex digits
fn check_escapes(text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let mut offset = 0;

    while offset < bytes.len() {
        if bytes[offset] == b'%' {
            let well_formed = bytes
                .get(offset + 1..offset + 3)
                .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                tracing::debug!(offset, "malformed percent escape");
                return Err(DecodeError::invalid_format(format!(
                    "malformed percent escape at offset {offset}"
                )));
            }
            offset += 3;
        } else {
            offset += 1;
        }
    }

    Ok(())
}

/// URL component codec
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlCodec;

impl TextCodec for UrlCodec {
    fn name(&self) -> &'static str {
        "url"
    }

    fn encode(&self, text: &str) -> String {
        encode(text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        decode(text)
    }
}
