//! Seed Commitment Protocol
//!
//! The backend commits to its server seed before a round starts by publishing
//! the seed's SHA-256 hex digest. After the round resolves it reveals the raw
//! seed, and this module checks that the reveal matches the commitment, so
//! the seed cannot have been swapped after bets were placed.

use serde::{Deserialize, Serialize};

use crate::core::hash::{is_hex_digest, sha256_hex};

/// Pre-round commitment to a server seed.
///
/// Published before the round starts; cannot be changed afterwards without
/// the mismatch being detectable by any player who kept the string. On the
/// wire this is a bare hex string (the backend's `privateSeedHash` field),
/// so it serializes transparently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedCommitment {
    /// Hex SHA-256 digest of the raw server seed, either case.
    hash: String,
}

impl SeedCommitment {
    /// Commit to a server seed.
    ///
    /// This is the operator side of the protocol; it exists here so fixtures
    /// and audits can produce commitments with the exact scheme the check
    /// expects.
    pub fn commit(server_seed: &str) -> Self {
        Self {
            hash: sha256_hex(server_seed),
        }
    }

    /// Wrap a commitment string received from the backend.
    ///
    /// The string is normalized to lowercase; no structural validation
    /// happens here, see [`SeedCommitment::well_formed`].
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into().to_ascii_lowercase(),
        }
    }

    /// The committed digest, lowercase hex.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Whether the commitment string is a structurally valid SHA-256 digest.
    ///
    /// A malformed commitment is a transport/operator bug, distinct from an
    /// honest mismatch against a revealed seed.
    pub fn well_formed(&self) -> bool {
        is_hex_digest(&self.hash)
    }

    /// Check a revealed server seed against this commitment.
    ///
    /// Returns `false` on mismatch. This is a trust/integrity signal, not an
    /// error: the caller surfaces it to the player as "this round's fairness
    /// could not be confirmed". Digest case is ignored; commitments arriving
    /// straight off the wire skip [`SeedCommitment::from_hash`] normalization.
    pub fn verify(&self, revealed_server_seed: &str) -> bool {
        sha256_hex(revealed_server_seed).eq_ignore_ascii_case(&self.hash)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_verify_round_trip() {
        let seed = "1bf502472e2123aa98d3e2fe7e54684a8055c4200fcafbb3106762e76a9230d6";
        let commitment = SeedCommitment::commit(seed);

        assert!(commitment.well_formed());
        assert!(commitment.verify(seed));
    }

    #[test]
    fn test_round_trip_random_seeds() {
        use rand::{distributions::Alphanumeric, Rng};

        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let seed: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(32)
                .map(char::from)
                .collect();
            assert!(SeedCommitment::commit(&seed).verify(&seed));
        }
    }

    #[test]
    fn test_tampered_seed_fails() {
        let commitment = SeedCommitment::commit("honest-seed");
        assert!(!commitment.verify("swapped-seed"));
    }

    #[test]
    fn test_known_commitment() {
        // sha256("abc123"), fixed forever
        let commitment = SeedCommitment::from_hash(
            "6ca13d52ca70c883e0f0bb101e425a89e8624de51db2d2392593af6a84118090",
        );
        assert!(commitment.verify("abc123"));
        assert!(!commitment.verify("abc124"));
    }

    #[test]
    fn test_uppercase_commitment_normalized() {
        // Some backends hex-encode uppercase; the check must not care.
        let commitment = SeedCommitment::from_hash(
            "6CA13D52CA70C883E0F0BB101E425A89E8624DE51DB2D2392593AF6A84118090",
        );
        assert!(commitment.well_formed());
        assert!(commitment.verify("abc123"));
    }

    #[test]
    fn test_malformed_commitment_detected() {
        assert!(!SeedCommitment::from_hash("not-a-digest").well_formed());
        assert!(!SeedCommitment::from_hash("").well_formed());
        // Right characters, wrong length
        assert!(!SeedCommitment::from_hash("6ca13d52").well_formed());
    }

    #[test]
    fn test_serde_transparent_string() {
        let commitment = SeedCommitment::commit("abc123");
        let json = serde_json::to_string(&commitment).unwrap();
        // Bare string on the wire, exactly as the backend sends it
        assert_eq!(
            json,
            "\"6ca13d52ca70c883e0f0bb101e425a89e8624de51db2d2392593af6a84118090\""
        );
        let back: SeedCommitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
    }

    #[test]
    fn test_wire_uppercase_commitment_verifies() {
        // Deserialization bypasses from_hash normalization
        let commitment: SeedCommitment = serde_json::from_str(
            "\"6CA13D52CA70C883E0F0BB101E425A89E8624DE51DB2D2392593AF6A84118090\"",
        )
        .unwrap();
        assert!(commitment.verify("abc123"));
    }
}
