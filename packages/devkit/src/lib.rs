//! # Devkit - Developer Text Utilities
//!
//! Pure text transformations and checks behind a small, feature-gated
//! surface:
//!
//! - `codec` - Base64 and URL component encoding
//! - `jwt` - structural decoding of three-segment tokens (no signature verification)
//! - `hashing` - SHA-1, SHA-256, SHA-384 and SHA-512 digest sets
//! - `xml` - well-formedness validation and pretty-printing
//! - `password` - character-class constrained generation and strength scoring
//!
//! All tools are enabled by default through the `full` feature.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # fn main() -> devkit::Result<()> {
//! use devkit::{DevkitConfig, Engine};
//!
//! let engine = Engine::new(DevkitConfig::from_json_str(r#"{"xml":{"indent_width":4}}"#)?)?;
//!
//! assert_eq!(engine.base64_encode("hi"), "aGk=");
//! assert_eq!(engine.format_document("<a><b/></a>")?, "<a>\n    <b/>\n</a>");
//! assert!(engine.decode_token("")?.is_none());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "full"))]
//! # fn main() {}
//! ```
//!
//! Empty or whitespace-only input is never an error. The codecs pass it
//! through as ordinary text (only Base64 decoding skips whitespace), the
//! token decoder returns `None`, the digest set is empty and the XML tools
//! accept it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod api;
mod config;
mod engine;

pub use api::*;
pub use config::DevkitConfig;
#[cfg(feature = "password")]
pub use config::PasswordConfig;
#[cfg(feature = "xml")]
pub use config::XmlConfig;
pub use engine::Engine;

pub use devkit_common::{is_idle, Error, ErrorKind, LoggingTransformer, Result};

// === Tool Re-exports ===

#[cfg(feature = "codec")]
#[cfg_attr(docsrs, doc(cfg(feature = "codec")))]
pub use devkit_codec::{self as codec, Base64Codec, Base64Variant, DecodeError, Direction, TextCodec, UrlCodec};

#[cfg(feature = "jwt")]
#[cfg_attr(docsrs, doc(cfg(feature = "jwt")))]
pub use devkit_jwt::{self as jwt, ClaimValue, Claims, DecodedToken, TokenError};

#[cfg(feature = "hashing")]
#[cfg_attr(docsrs, doc(cfg(feature = "hashing")))]
pub use devkit_hashing::{self as hashing, DigestAlgorithm, DigestOutput, DigestSet};

#[cfg(feature = "xml")]
#[cfg_attr(docsrs, doc(cfg(feature = "xml")))]
pub use devkit_xml::{self as xml, FormatError, ValidationError, XmlFormatter};

#[cfg(feature = "password")]
#[cfg_attr(docsrs, doc(cfg(feature = "password")))]
pub use devkit_password::{
    self as password, CharClass, GenerationError, PasswordOptions, Strength, StrengthScore,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DevkitConfig, Engine, Error, ErrorKind, Result};

    #[cfg(feature = "codec")]
    pub use crate::{Direction, TextCodec};

    #[cfg(feature = "hashing")]
    pub use crate::DigestAlgorithm;

    #[cfg(feature = "password")]
    pub use crate::CharClass;
}
