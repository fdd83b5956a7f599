//! SHA-family digests over UTF-8 text.
//!
//! Every non-idle input is hashed independently with SHA-1, SHA-256,
//! SHA-384 and SHA-512. The result is a [`DigestSet`] whose entries render
//! as lowercase hex or base64.
//!
//! ```
//! use devkit_hashing::{digest_all, DigestAlgorithm};
//!
//! let set = digest_all("abc");
//! assert_eq!(
//!     set.hex(DigestAlgorithm::Sha1).as_deref(),
//!     Some("a9993e364706816aba3e25717850c26c9cd0d89d")
//! );
//! assert!(digest_all("   ").is_empty());
//! ```

#![forbid(unsafe_code)]

mod algorithm;
mod digest_set;
mod hash_result;

pub use algorithm::DigestAlgorithm;
pub use digest_set::DigestSet;
pub use hash_result::DigestOutput;

use algorithm::HasherState;
use devkit_common::is_idle;

const CHUNK_SIZE: usize = 8192;

/// Compute a single digest over raw bytes
#[must_use]
pub fn digest(algorithm: DigestAlgorithm, bytes: &[u8]) -> DigestOutput {
    let mut state = HasherState::new(algorithm);
    state.update(bytes);
    DigestOutput::new(algorithm, state.finalize())
}

/// Hash the UTF-8 bytes of `text` with every algorithm.
///
/// Empty or whitespace-only text yields an empty set.
#[must_use]
pub fn digest_all(text: &str) -> DigestSet {
    let mut set = DigestSet::default();
    if is_idle(text) {
        return set;
    }
    for algorithm in DigestAlgorithm::ALL {
        set.insert(digest(algorithm, text.as_bytes()));
    }
    tracing::trace!(input_len = text.len(), "computed digest set");
    set
}

/// Suspending variant of [`digest_all`].
///
/// Input is fed to the hashers in 8 KiB chunks, yielding to the scheduler
/// between chunks. The result equals `digest_all(text)`.
pub async fn digest_all_async(text: &str) -> DigestSet {
    let mut set = DigestSet::default();
    if is_idle(text) {
        return set;
    }

    let mut states: Vec<(DigestAlgorithm, HasherState)> = DigestAlgorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, HasherState::new(algorithm)))
        .collect();

    for chunk in text.as_bytes().chunks(CHUNK_SIZE) {
        for (_, state) in &mut states {
            state.update(chunk);
        }
        tokio::task::yield_now().await;
    }

    for (algorithm, state) in states {
        set.insert(DigestOutput::new(algorithm, state.finalize()));
    }
    tracing::trace!(input_len = text.len(), "computed digest set asynchronously");
    set
}
