//! Structural decoding of three-segment JSON web tokens.
//!
//! The header and payload are base64url-decoded and parsed as JSON
//! objects; the signature is kept verbatim and never verified. Expiry
//! (`exp`) and not-before (`nbf`) claims are evaluated against the decode
//! instant.

#![forbid(unsafe_code)]

mod claims;
mod decoder;
mod error;
mod token;

pub use claims::{ClaimValue, Claims};
pub use decoder::{decode, decode_at};
pub use error::{Result, Segment, TokenError};
pub use token::{DecodedToken, VERIFICATION_CAVEAT};
