//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Umbrella error shared by every devkit tool
///
/// Component crates return their own precise error enums; callers that drive
/// several tools at once (the `devkit` engine, configuration loading) convert
/// them into this type so a single `Result` can flow back to the presentation
/// layer.
#[derive(Debug, Clone)]
pub struct Error {
    /// The actual error
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// The error kind
    pub kind: ErrorKind,
    /// Optional error context
    pub context: Option<String>,
    /// Optional source error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Input could not be decoded by a reversible codec
    #[error("Decode error")]
    Decode,

    /// A structural token could not be decoded
    #[error("Token error")]
    Token,

    /// A document failed well-formedness validation
    #[error("Validation error")]
    Validation,

    /// A validated document could not be re-serialized
    #[error("Formatting error")]
    Format,

    /// Secret generation was refused
    #[error("Generation error")]
    Generation,

    /// Configuration errors
    #[error("Configuration error")]
    Configuration,

    /// I/O related errors
    #[error("I/O error")]
    Io,

    /// Internal error
    #[error("Internal error")]
    Internal,

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
