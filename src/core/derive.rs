//! Seed-Pair Outcome Derivation
//!
//! Reconstructs the integer outcome the backend used to resolve a round step
//! from the revealed server seed, the client seed, and the step index.
//!
//! # Wire Agreement
//!
//! The scheme below is an external agreement with the backend and must match
//! it bit-for-bit; nothing in the function signature can enforce it:
//!
//! 1. message = `serverSeed || clientSeed || decimal(roundIndex)`
//!    (plain string concatenation, index rendered unpadded in base 10)
//! 2. digest = SHA-256(message)
//! 3. take the first 8 hex characters of the digest (= first 4 bytes,
//!    big-endian, 32 bits) and parse them as an unsigned integer
//! 4. outcome = parsed value mod `range_width`
//!
//! Rows of a multi-step round are derived independently (the index is hashed
//! in, not chained), so any subset of rows can be verified without
//! recomputing the rest.

use crate::core::hash::sha256_bytes;

/// Derive the outcome for a single round step.
///
/// Pure and deterministic: identical inputs always produce the identical
/// output, which is the property that makes third-party verification
/// possible.
///
/// The result lies in `[0, range_width)`. A `range_width` of zero returns 0;
/// callers must not treat that value as meaningful. Empty seeds are accepted
/// (the UI calls this before the server seed is revealed) and produce a
/// well-typed value that must not be displayed as authoritative.
///
/// # Example
///
/// ```
/// use fairgrid::derive_outcome;
///
/// let column = derive_outcome("abc123", "def456", 0, 5);
/// assert_eq!(column, 3); // Always the same!
/// ```
pub fn derive_outcome(
    server_seed: &str,
    client_seed: &str,
    round_index: u32,
    range_width: u32,
) -> u32 {
    if range_width == 0 {
        return 0;
    }

    let message = format!("{}{}{}", server_seed, client_seed, round_index);
    let digest = sha256_bytes(&message);

    // First 8 hex chars of the digest == first 4 bytes, big-endian.
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    prefix % range_width
}

/// Derive one outcome per row for a multi-step round.
///
/// Equivalent to calling [`derive_outcome`] for every index in `[0, rows)`;
/// there is no cross-row state.
pub fn derive_outcomes(
    server_seed: &str,
    client_seed: &str,
    rows: u32,
    range_width: u32,
) -> Vec<u32> {
    (0..rows)
        .map(|i| derive_outcome(server_seed, client_seed, i, range_width))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
