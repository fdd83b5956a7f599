//! Configured, logged entry point to every tool

use crate::config::DevkitConfig;
use devkit_common::{Error, LoggingTransformer, Result};
use std::path::Path;

/// Runs the tools with shared configuration.
///
/// Each call is logged by tool name and input length. Failures are
/// converted into [`devkit_common::Error`]. Tokens and generated passwords
/// only ever appear in logs as fingerprints.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: DevkitConfig,
}

impl Engine {
    /// Engine over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an [`devkit_common::ErrorKind::Configuration`] error when
    /// `config` fails [`DevkitConfig::validate`].
    pub fn new(config: DevkitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine over a JSON configuration file
    ///
    /// # Errors
    ///
    /// See [`DevkitConfig::load`].
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(DevkitConfig::load(path)?)
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &DevkitConfig {
        &self.config
    }

    fn observe<T, E>(tool: &str, input_len: usize, result: std::result::Result<T, E>) -> Result<T>
    where
        E: std::error::Error + Into<Error>,
    {
        match result {
            Ok(value) => {
                LoggingTransformer::log_tool_run(tool, input_len, true);
                Ok(value)
            }
            Err(e) => {
                LoggingTransformer::log_tool_failure(tool, &e);
                Err(e.into())
            }
        }
    }

    /// Standard padded base64 of the UTF-8 bytes of `text`
    #[cfg(feature = "codec")]
    #[must_use]
    pub fn base64_encode(&self, text: &str) -> String {
        LoggingTransformer::log_tool_run("base64.encode", text.len(), true);
        devkit_codec::base64::encode(text)
    }

    /// Decode base64 back to UTF-8 text
    ///
    /// # Errors
    ///
    /// A [`devkit_common::ErrorKind::Decode`] error wrapping the codec's
    /// [`devkit_codec::DecodeError`].
    #[cfg(feature = "codec")]
    pub fn base64_decode(&self, text: &str) -> Result<String> {
        Self::observe("base64.decode", text.len(), devkit_codec::base64::decode(text))
    }

    /// Percent-encode `text` as a URL component
    #[cfg(feature = "codec")]
    #[must_use]
    pub fn url_encode(&self, text: &str) -> String {
        LoggingTransformer::log_tool_run("url.encode", text.len(), true);
        devkit_codec::url::encode(text)
    }

    /// Reverse URL component encoding
    ///
    /// # Errors
    ///
    /// A [`devkit_common::ErrorKind::Decode`] error for malformed escapes or
    /// non-UTF-8 results.
    #[cfg(feature = "codec")]
    pub fn url_decode(&self, text: &str) -> Result<String> {
        Self::observe("url.decode", text.len(), devkit_codec::url::decode(text))
    }

    /// Decode a structural token; idle input yields `Ok(None)`
    ///
    /// # Errors
    ///
    /// A [`devkit_common::ErrorKind::Token`] error for malformed tokens.
    #[cfg(feature = "jwt")]
    pub fn decode_token(&self, token: &str) -> Result<Option<devkit_jwt::DecodedToken>> {
        let decoded = Self::observe("jwt.decode", token.len(), devkit_jwt::decode(token))?;
        if decoded.is_some() {
            LoggingTransformer::log_secret("jwt.decode", token.trim());
        }
        Ok(decoded)
    }

    /// SHA-1/256/384/512 digests of `text`
    #[cfg(feature = "hashing")]
    #[must_use]
    pub fn digest_all(&self, text: &str) -> devkit_hashing::DigestSet {
        LoggingTransformer::log_tool_run("hash.digest_all", text.len(), true);
        devkit_hashing::digest_all(text)
    }

    /// Suspending variant of [`Engine::digest_all`]
    #[cfg(feature = "hashing")]
    pub async fn digest_all_async(&self, text: &str) -> devkit_hashing::DigestSet {
        LoggingTransformer::log_tool_run("hash.digest_all_async", text.len(), true);
        devkit_hashing::digest_all_async(text).await
    }

    /// Check XML well-formedness
    ///
    /// # Errors
    ///
    /// A [`devkit_common::ErrorKind::Validation`] error carrying the
    /// diagnostic and byte position.
    #[cfg(feature = "xml")]
    pub fn validate_document(&self, doc: &str) -> Result<()> {
        Self::observe("xml.validate", doc.len(), devkit_xml::validate(doc))
    }

    /// Pretty-print XML with the configured indent width
    ///
    /// # Errors
    ///
    /// [`devkit_common::ErrorKind::Validation`] for malformed input,
    /// [`devkit_common::ErrorKind::Format`] when re-serialization fails.
    #[cfg(feature = "xml")]
    pub fn format_document(&self, doc: &str) -> Result<String> {
        let formatter = devkit_xml::XmlFormatter::with_indent(self.config.xml.indent_width);
        Self::observe("xml.format", doc.len(), formatter.format(doc))
    }

    /// Generate a password from the configured options
    ///
    /// # Errors
    ///
    /// A [`devkit_common::ErrorKind::Generation`] error when no classes are
    /// enabled or the length exceeds [`devkit_password::MAX_LENGTH`].
    #[cfg(feature = "password")]
    pub fn generate_secret(&self) -> Result<String> {
        self.generate_with(&self.config.password.options())
    }

    /// Generate a password with explicit length and classes, keeping the
    /// configured ambiguity setting
    ///
    /// # Errors
    ///
    /// See [`Engine::generate_secret`].
    #[cfg(feature = "password")]
    pub fn generate_secret_with(
        &self,
        length: usize,
        classes: &[devkit_password::CharClass],
    ) -> Result<String> {
        let options = devkit_password::PasswordOptions::new(length, classes)
            .with_exclude_ambiguous(self.config.password.exclude_ambiguous);
        self.generate_with(&options)
    }

    #[cfg(feature = "password")]
    fn generate_with(&self, options: &devkit_password::PasswordOptions) -> Result<String> {
        if options.length > devkit_password::MAX_LENGTH {
            LoggingTransformer::log_tool_run("password.generate", options.length, false);
            return Err(Error::generation().context(format!(
                "length {} exceeds the maximum of {}",
                options.length,
                devkit_password::MAX_LENGTH
            )));
        }
        let secret = Self::observe(
            "password.generate",
            options.length,
            devkit_password::generate_with_options(options),
        )?;
        LoggingTransformer::log_secret("password.generate", &secret);
        Ok(secret)
    }

    /// Score a password's strength
    #[cfg(feature = "password")]
    #[must_use]
    pub fn score_secret(&self, secret: &str) -> devkit_password::StrengthScore {
        let score = devkit_password::score(secret);
        LoggingTransformer::log_tool_run("password.score", secret.chars().count(), true);
        score
    }
}
