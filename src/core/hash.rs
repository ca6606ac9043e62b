//! SHA-256 digest helpers.
//!
//! Provides the hash primitives shared by outcome derivation and the seed
//! commitment check. Digests are exchanged with the backend as lowercase hex
//! strings, so helpers exist for both raw and hex-encoded output.

use sha2::{Digest, Sha256};

/// Raw digest output type (256 bits / 32 bytes)
pub type DigestBytes = [u8; 32];

/// Compute the SHA-256 digest of a UTF-8 message.
pub fn sha256_bytes(message: &str) -> DigestBytes {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    hasher.finalize().into()
}

/// Compute the SHA-256 digest of a UTF-8 message, lowercase hex-encoded.
///
/// This is the exact format the backend publishes for seed commitments.
pub fn sha256_hex(message: &str) -> String {
    hex::encode(sha256_bytes(message))
}

/// Check that a string is a well-formed hex SHA-256 digest.
///
/// Accepts either case; 64 hex characters, nothing else.
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_value() {
        // Standard test vector: sha256("abc123")
        assert_eq!(
            sha256_hex("abc123"),
            "6ca13d52ca70c883e0f0bb101e425a89e8624de51db2d2392593af6a84118090"
        );
    }

    #[test]
    fn test_sha256_bytes_matches_hex() {
        let raw = sha256_bytes("some seed material");
        assert_eq!(hex::encode(raw), sha256_hex("some seed material"));
    }

    #[test]
    fn test_sha256_empty_message() {
        // sha256 of the empty string is a fixed constant
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_is_hex_digest() {
        let digest = sha256_hex("x");
        assert!(is_hex_digest(&digest));
        assert!(is_hex_digest(&digest.to_uppercase()));

        // Wrong length
        assert!(!is_hex_digest(&digest[..63]));
        assert!(!is_hex_digest(""));

        // Non-hex characters
        let mut bad = digest.clone();
        bad.replace_range(0..1, "g");
        assert!(!is_hex_digest(&bad));
    }
}
