//! Error handling with context propagation
//!
//! Provides the umbrella error type used when several tools report through
//! a single channel:
//! - Error chaining and context preservation
//! - Structured error kinds with thiserror

pub mod constructors;
pub mod display;
pub mod types;

// Re-export all public types
pub use types::{Error, ErrorKind, Result};
