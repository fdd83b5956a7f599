//! XML well-formedness checking and pretty-printing.
//!
//! [`validate`] reports the first structural problem with its byte offset.
//! [`format`] validates first and re-serializes with two-space indentation;
//! use [`XmlFormatter::with_indent`] for another width. Empty or
//! whitespace-only input is idle: it validates and formats to nothing.

#![forbid(unsafe_code)]

mod chars;
mod document;
mod error;
mod formatter;

pub use error::{FormatError, ValidationError};
pub use formatter::XmlFormatter;

use devkit_common::is_idle;

/// Check that `doc` is a well-formed document with exactly one root element.
///
/// # Errors
///
/// Returns a [`ValidationError`] for unclosed or mismatched tags, bad
/// entities or attributes, a missing or repeated root, and text outside
/// the root.
pub fn validate(doc: &str) -> Result<(), ValidationError> {
    if is_idle(doc) {
        return Ok(());
    }
    document::parse(doc).map(|_| ())
}

/// Validate and pretty-print `doc` with the default indent.
///
/// # Errors
///
/// See [`XmlFormatter::format`].
pub fn format(doc: &str) -> Result<String, FormatError> {
    XmlFormatter::default().format(doc)
}
