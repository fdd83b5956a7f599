//! Constrained random generation

use crate::charset::CharClass;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

/// Longest password configuration and the engine accept; also the most
/// capacity the generator reserves up front
pub const MAX_LENGTH: usize = 4096;

/// Generation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The class list was empty
    #[error("No character classes enabled")]
    NoClassesEnabled,
}

impl From<GenerationError> for devkit_common::Error {
    fn from(err: GenerationError) -> Self {
        devkit_common::Error::with_source(devkit_common::ErrorKind::Generation, err)
    }
}

/// Parameters for a single generated password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    /// Number of characters
    pub length: usize,
    /// Enabled classes, in enabling order
    pub classes: Vec<CharClass>,
    /// Drop look-alike characters from every class
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharClass::ALL.to_vec(),
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Options for `length` characters drawn from `classes`
    #[must_use]
    pub fn new(length: usize, classes: &[CharClass]) -> Self {
        Self {
            length,
            classes: classes.to_vec(),
            exclude_ambiguous: false,
        }
    }

    /// Toggle look-alike exclusion
    #[must_use]
    pub fn with_exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    // Duplicates are ignored; first occurrence fixes the order.
    fn enabled_classes(&self) -> Vec<CharClass> {
        let mut enabled = Vec::with_capacity(self.classes.len());
        for class in &self.classes {
            if !enabled.contains(class) {
                enabled.push(*class);
            }
        }
        enabled
    }
}

/// Generate `length` characters from `classes` with the thread-local CSPRNG.
///
/// # Errors
///
/// [`GenerationError::NoClassesEnabled`] when `classes` is empty.
pub fn generate(length: usize, classes: &[CharClass]) -> Result<String, GenerationError> {
    generate_with_options(&PasswordOptions::new(length, classes))
}

/// Generate with full options using the thread-local CSPRNG.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with_options(options: &PasswordOptions) -> Result<String, GenerationError> {
    generate_with_rng(options, &mut rand::rng())
}

/// Generate with a caller-supplied cryptographic RNG.
///
/// One character of each enabled class is placed first, in enabling order,
/// and only as many classes as `length` allows. The rest is drawn uniformly
/// from the union of all enabled classes and the whole buffer is shuffled.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with_rng<R>(options: &PasswordOptions, rng: &mut R) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    let classes = options.enabled_classes();
    if classes.is_empty() {
        tracing::warn!("password generation requested with no classes enabled");
        return Err(GenerationError::NoClassesEnabled);
    }

    let pools: Vec<Vec<char>> = classes
        .iter()
        .map(|class| class.pool(options.exclude_ambiguous))
        .collect();
    let union: Vec<char> = pools.iter().flatten().copied().collect();

    let mut buffer = Zeroizing::new(Vec::with_capacity(options.length.min(MAX_LENGTH)));
    for pool in pools.iter().take(options.length) {
        buffer.push(pool[rng.random_range(0..pool.len())]);
    }
    while buffer.len() < options.length {
        buffer.push(union[rng.random_range(0..union.len())]);
    }
    buffer.shuffle(rng);

    tracing::debug!(
        length = options.length,
        classes = classes.len(),
        exclude_ambiguous = options.exclude_ambiguous,
        "generated password"
    );
    Ok(buffer.iter().collect())
}
