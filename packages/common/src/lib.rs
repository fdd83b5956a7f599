//! Common infrastructure and utilities for the devkit tools
//!
//! This crate provides shared functionality used across all devkit crates:
//! - Umbrella error type with context propagation
//! - Logging bootstrap with secret-safe helpers
//! - Idle-input detection

#![forbid(unsafe_code)]

pub mod error;
pub mod idle;
pub mod logging;

pub use error::*;
pub use idle::is_idle;
pub use logging::LoggingTransformer;
