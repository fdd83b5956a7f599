//! Reversible text codecs: Base64 and URL component percent-encoding
//!
//! Both codecs work on UTF-8 text and satisfy `decode(encode(s)) == s`.

#![forbid(unsafe_code)]

pub mod base64;
pub mod error;
pub mod url;

pub use self::base64::{Base64Codec, Base64Variant};
pub use error::{DecodeError, Result};
pub use self::url::UrlCodec;

/// Which way a codec runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Text to encoded form
    #[default]
    Encode,
    /// Encoded form back to text
    Decode,
}

impl Direction {
    /// The opposite direction, used when a previous output becomes the next input
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Encode => Self::Decode,
            Self::Decode => Self::Encode,
        }
    }
}

/// A reversible transformation between text and an encoded form
pub trait TextCodec {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Encode text
    fn encode(&self, text: &str) -> String;

    /// Decode previously encoded text
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when the input is not a valid encoding.
    fn decode(&self, text: &str) -> Result<String>;

    /// Run the codec in the given direction
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when decoding fails; encoding never fails.
    fn apply(&self, direction: Direction, text: &str) -> Result<String> {
        match direction {
            Direction::Encode => Ok(self.encode(text)),
            Direction::Decode => self.decode(text),
        }
    }
}
