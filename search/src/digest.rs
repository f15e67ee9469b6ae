//! Content digests for run artifacts.
//!
//! Format: `"sha256:<hex_digest>"`. Every digest mixes in a null-terminated
//! domain prefix so artifacts of different kinds can never collide on the
//! same input bytes.

use sha2::{Digest, Sha256};

/// Domain prefix for run-report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"CAIRN::RUN_REPORT::V1\0";

/// Domain prefix for bare search-stats digests.
pub const DOMAIN_SEARCH_STATS: &[u8] = b"CAIRN::SEARCH_STATS::V1\0";

/// A content digest with algorithm identifier.
///
/// Invariant: the inner string contains exactly one `:` separator with
/// non-empty substrings on both sides (enforced by [`RunDigest::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunDigest {
    /// Full string in `"algorithm:hex_digest"` format.
    full: String,
    /// Byte offset of the `:` separator.
    colon: usize,
}

impl RunDigest {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` on a missing colon, empty algorithm, or empty digest.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let colon = text.find(':')?;
        if colon == 0 || colon == text.len() - 1 {
            return None;
        }
        Some(Self {
            full: text.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// SHA-256 digest of `data` under a domain-separation prefix.
#[must_use]
pub fn digest_bytes(domain: &[u8], data: &[u8]) -> RunDigest {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    RunDigest {
        colon: "sha256".len(),
        full: format!("sha256:{hex_digest}"),
    }
}
