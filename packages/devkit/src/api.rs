//! Flat, unconfigured entry points
//!
//! Each function forwards to its tool crate and keeps that crate's precise
//! error type. Use [`crate::Engine`] for configured, logged calls that
//! return [`devkit_common::Error`].

#[cfg(feature = "codec")]
pub use devkit_codec::base64::{decode as base64_decode, encode as base64_encode};

#[cfg(feature = "codec")]
pub use devkit_codec::url::{decode as url_decode, encode as url_encode};

#[cfg(feature = "jwt")]
pub use devkit_jwt::decode as decode_token;

#[cfg(feature = "hashing")]
pub use devkit_hashing::{digest_all, digest_all_async};

#[cfg(feature = "xml")]
pub use devkit_xml::{format as format_document, validate as validate_document};

#[cfg(feature = "password")]
pub use devkit_password::{generate as generate_secret, score as score_secret};
