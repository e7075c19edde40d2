//! SHA-256 checksum utilities
//!
//! Checksums use the canonical `sha256:<hex>` format. Schema documents are
//! fingerprinted when loaded and again after patching; equal checksums mean
//! there is nothing to write.

use sha2::{Digest, Sha256};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of in-memory bytes.
pub fn compute_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_has_prefix() {
        assert!(compute_checksum(b"hello world").starts_with("sha256:"));
    }

    #[test]
    fn checksum_is_deterministic() {
        assert_eq!(compute_checksum(b"{}\n"), compute_checksum(b"{}\n"));
    }

    #[test]
    fn trailing_newline_changes_checksum() {
        assert_ne!(compute_checksum(b"{}"), compute_checksum(b"{}\n"));
    }

    #[test]
    fn checksum_known_value() {
        assert_eq!(
            compute_checksum(b"hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }
}
