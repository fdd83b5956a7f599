//! Error constructors and methods

use super::types::{Error, ErrorInner, ErrorKind};
use std::fmt;
use std::sync::Arc;

impl Error {
    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source: None,
            }),
        }
    }

    /// Create an error with a source error
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source: Some(Box::new(source)),
            }),
        }
    }

    /// Add context to this error
    ///
    /// A bare error (no context, no source) is simply annotated; anything
    /// richer is kept as the source of the new error so nothing is lost.
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        let kind = self.inner.kind.clone();
        let source = if self.inner.context.is_some() || self.inner.source.is_some() {
            Some(Box::new(self) as Box<dyn std::error::Error + Send + Sync>)
        } else {
            None
        };

        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: Some(context.to_string()),
                source,
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Create a decode error
    #[must_use]
    pub fn decode() -> Self {
        Self::new(ErrorKind::Decode)
    }

    /// Create a token error
    #[must_use]
    pub fn token() -> Self {
        Self::new(ErrorKind::Token)
    }

    /// Create a validation error
    #[must_use]
    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Create a formatting error
    #[must_use]
    pub fn format() -> Self {
        Self::new(ErrorKind::Format)
    }

    /// Create a generation error
    #[must_use]
    pub fn generation() -> Self {
        Self::new(ErrorKind::Generation)
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Create an I/O error
    #[must_use]
    pub fn io() -> Self {
        Self::new(ErrorKind::Io)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Create an other error with custom message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::Other(msg.into()))
    }
}
