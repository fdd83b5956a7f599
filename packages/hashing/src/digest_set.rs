//! Ordered collection of digests computed over the same input

use crate::{DigestAlgorithm, DigestOutput};
use std::collections::BTreeMap;

/// One digest per algorithm, keyed and iterated in [`DigestAlgorithm::ALL`] order.
///
/// Idle input produces an empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigestSet {
    entries: BTreeMap<DigestAlgorithm, DigestOutput>,
}

impl DigestSet {
    pub(crate) fn insert(&mut self, output: DigestOutput) {
        self.entries.insert(output.algorithm(), output);
    }

    /// Digest for `algorithm`, if the set is populated
    #[must_use]
    pub fn get(&self, algorithm: DigestAlgorithm) -> Option<&DigestOutput> {
        self.entries.get(&algorithm)
    }

    /// Lowercase hex digest for `algorithm`
    #[must_use]
    pub fn hex(&self, algorithm: DigestAlgorithm) -> Option<String> {
        self.get(algorithm).map(DigestOutput::to_hex)
    }

    /// Iterate `(algorithm, digest)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (DigestAlgorithm, &DigestOutput)> {
        self.entries.iter().map(|(algorithm, output)| (*algorithm, output))
    }

    /// Number of digests held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when computed from idle input
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
