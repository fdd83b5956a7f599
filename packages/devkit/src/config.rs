//! JSON configuration for [`crate::Engine`]

use devkit_common::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration
///
/// Every field has a default, so `{}` is a complete configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevkitConfig {
    /// XML formatting settings
    #[cfg(feature = "xml")]
    #[serde(default)]
    pub xml: XmlConfig,
    /// Password generation settings
    #[cfg(feature = "password")]
    #[serde(default)]
    pub password: PasswordConfig,
}

/// XML formatting settings
#[cfg(feature = "xml")]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlConfig {
    /// Spaces per nesting level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

#[cfg(feature = "xml")]
impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
        }
    }
}

#[cfg(feature = "xml")]
fn default_indent_width() -> usize {
    2
}

/// Password generation settings
#[cfg(feature = "password")]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Characters per generated password
    #[serde(default = "default_password_length")]
    pub length: usize,
    /// Enabled classes, in enabling order
    #[serde(default = "default_password_classes")]
    pub classes: Vec<devkit_password::CharClass>,
    /// Drop look-alike characters
    #[serde(default)]
    pub exclude_ambiguous: bool,
}

#[cfg(feature = "password")]
impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_password_length(),
            classes: default_password_classes(),
            exclude_ambiguous: false,
        }
    }
}

#[cfg(feature = "password")]
impl PasswordConfig {
    /// Generator options described by this section
    #[must_use]
    pub fn options(&self) -> devkit_password::PasswordOptions {
        devkit_password::PasswordOptions::new(self.length, &self.classes)
            .with_exclude_ambiguous(self.exclude_ambiguous)
    }
}

#[cfg(feature = "password")]
fn default_password_length() -> usize {
    16
}

#[cfg(feature = "password")]
fn default_password_classes() -> Vec<devkit_password::CharClass> {
    devkit_password::CharClass::ALL.to_vec()
}

impl DevkitConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Configuration`] error when the JSON is
    /// malformed or describes an unusable configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::with_source(ErrorKind::Configuration, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Io`] error when the file cannot be read, and
    /// the errors of [`DevkitConfig::from_json_str`] otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(format!("reading {}", path.display())))?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Reject settings the tools cannot honour
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Configuration`] error for a zero indent width,
    /// an empty password class list or a password length above
    /// [`devkit_password::MAX_LENGTH`].
    pub fn validate(&self) -> Result<()> {
        #[cfg(feature = "xml")]
        if self.xml.indent_width == 0 {
            return Err(Error::configuration().context("xml.indent_width must be at least 1"));
        }
        #[cfg(feature = "password")]
        if self.password.classes.is_empty() {
            return Err(Error::configuration().context("password.classes must not be empty"));
        }
        #[cfg(feature = "password")]
        if self.password.length > devkit_password::MAX_LENGTH {
            return Err(Error::configuration().context(format!(
                "password.length must be at most {}",
                devkit_password::MAX_LENGTH
            )));
        }
        Ok(())
    }
}
