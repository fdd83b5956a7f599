//! XML validation and formatting errors

/// A well-formedness failure with the byte offset where it was detected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (at byte {position})")]
pub struct ValidationError {
    /// Parser diagnostic
    pub message: String,
    /// Byte offset into the input
    pub position: usize,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Formatting failures, kept distinct from plain validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The document did not validate, so no formatting was attempted
    #[error("Invalid XML: {0}")]
    Invalid(#[from] ValidationError),
    /// A validated document could not be written back out
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<ValidationError> for devkit_common::Error {
    fn from(err: ValidationError) -> Self {
        devkit_common::Error::with_source(devkit_common::ErrorKind::Validation, err)
    }
}

impl From<FormatError> for devkit_common::Error {
    fn from(err: FormatError) -> Self {
        let kind = match err {
            FormatError::Invalid(_) => devkit_common::ErrorKind::Validation,
            FormatError::Serialization(_) => devkit_common::ErrorKind::Format,
        };
        devkit_common::Error::with_source(kind, err)
    }
}
