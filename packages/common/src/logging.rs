//! Structured logging bootstrap
//!
//! Provides env_logger-based logging with secure handling of secret-bearing
//! input. Component crates emit `tracing` events, which are forwarded to the
//! `log` facade and end up here.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=warn` - Only rejected input and failures
    /// - `RUST_LOG=devkit_jwt=debug,devkit_xml=info` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            // A host application may already own the global logger
            if env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok()
            {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed tool invocation
    ///
    /// Only the input length is recorded, never the input itself.
    pub fn log_tool_run(tool: &str, input_len: usize, success: bool) {
        if success {
            debug!("Tool run: {tool} (input_len: {input_len})");
        } else {
            warn!("Tool run rejected: {tool} (input_len: {input_len})");
        }
    }

    /// Log a tool failure without exposing the offending input
    pub fn log_tool_failure(tool: &str, error: &dyn std::error::Error) {
        warn!("Tool failed: {tool} ({error})");
    }

    /// Log a secret-bearing value by fingerprint only
    pub fn log_secret(tool: &str, secret: &str) {
        debug!(
            "Tool produced secret: {tool} (fingerprint: {}, len: {})",
            Self::fingerprint(secret),
            secret.chars().count()
        );
    }

    /// Stable, non-reversible fingerprint for correlating secrets in logs
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256
    /// digest.
    #[must_use]
    pub fn fingerprint(value: &str) -> String {
        let hash = Sha256::digest(value.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint() {
        LoggingTransformer::init_test();

        let first = LoggingTransformer::fingerprint("eyJhbGciOiJIUzI1NiJ9.e30.sig");
        let second = LoggingTransformer::fingerprint("correct horse battery staple");

        assert_ne!(first, second);
        assert_eq!(
            first,
            LoggingTransformer::fingerprint("eyJhbGciOiJIUzI1NiJ9.e30.sig")
        );
        assert!(first.starts_with('#'));
        assert_eq!(first.len(), 13);
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_tool_run("base64.encode", 12, true);
        LoggingTransformer::log_tool_run("url.decode", 3, false);
        LoggingTransformer::log_secret("password.generate", "hunter2");
        let err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad input");
        LoggingTransformer::log_tool_failure("xml.format", &err);
    }
}
