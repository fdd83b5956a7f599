//! A single digest value with encoding support

use crate::DigestAlgorithm;
use base64::Engine as _;

/// Output of one algorithm over one input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestOutput {
    algorithm: DigestAlgorithm,
    bytes: Vec<u8>,
}

impl DigestOutput {
    pub(crate) fn new(algorithm: DigestAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hexadecimal rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Standard padded base64 rendering
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Digest size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a computed digest
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for DigestOutput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<DigestOutput> for Vec<u8> {
    fn from(output: DigestOutput) -> Self {
        output.bytes
    }
}

impl std::fmt::Display for DigestOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
