//! Round Verification
//!
//! Turns a revealed seed pair into a full audit report for one round:
//! commitment check plus the reconstructed bomb column for every grid row.
//! This is what the "Verify" panel calls when a player re-checks a past
//! round.

use serde::{Deserialize, Serialize};

use crate::core::derive::derive_outcomes;
use crate::grid::config::GridConfig;
use crate::verify::commitment::SeedCommitment;

/// Round-resolution payload revealed by the backend after a round ends.
///
/// Mirrors the reveal message shape (`serverSeed`, `clientSeed`,
/// `privateSeedHash`); deserializable straight from that JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReveal {
    /// Raw server seed, secret until the round resolved.
    #[serde(rename = "serverSeed")]
    pub server_seed: String,

    /// Client seed, player-supplied or echoed by the backend.
    #[serde(rename = "clientSeed")]
    pub client_seed: String,

    /// The commitment published before the round started.
    #[serde(rename = "privateSeedHash")]
    pub commitment: SeedCommitment,
}

/// Full audit report for one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundVerification {
    /// Did the revealed server seed hash to the pre-round commitment?
    pub commitment_valid: bool,

    /// Reconstructed bomb column per row, row 0 first.
    pub bomb_columns: Vec<u32>,

    /// Grid the round was played on.
    pub config: GridConfig,
}

/// Result of replaying a player's picks against the bomb layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathReplay {
    /// Rows cleared before hitting a bomb (or the full path length).
    pub rows_cleared: u32,

    /// Row where the path hit a bomb, if it did.
    pub busted_at: Option<u32>,

    /// Payout multiplier the surviving portion of the path was worth.
    pub multiplier: f64,
}

/// Structural errors that prevent verification from running at all.
///
/// A failed commitment check is *not* an error; it lands in
/// [`RoundVerification::commitment_valid`] so the UI can surface it as an
/// integrity signal.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VerifyError {
    /// Commitment string is not a hex SHA-256 digest.
    #[error("commitment {0:?} is not a well-formed hex digest")]
    MalformedCommitment(String),

    /// A reveal payload with an empty seed is structurally invalid.
    #[error("reveal is missing the {0} seed")]
    MissingSeed(&'static str),

    /// Grid configuration failed validation.
    #[error(transparent)]
    InvalidConfig(#[from] crate::grid::config::ConfigError),
}

/// Verify a revealed round against its pre-round commitment.
///
/// Errors only on structurally invalid input. An honest mismatch (operator
/// swapped the seed) comes back as a report with `commitment_valid == false`,
/// with the bomb columns still derived so the UI can show what the revealed
/// seeds *would* have produced.
pub fn verify_round(
    reveal: &RoundReveal,
    config: &GridConfig,
) -> Result<RoundVerification, VerifyError> {
    if reveal.server_seed.is_empty() {
        return Err(VerifyError::MissingSeed("server"));
    }
    if reveal.client_seed.is_empty() {
        return Err(VerifyError::MissingSeed("client"));
    }
    if !reveal.commitment.well_formed() {
        return Err(VerifyError::MalformedCommitment(
            reveal.commitment.hash().to_string(),
        ));
    }
    // Re-validate the shape; configs built by hand can be inconsistent.
    GridConfig::new(config.width, config.height, config.multipliers.clone())?;

    let commitment_valid = reveal.commitment.verify(&reveal.server_seed);
    let bomb_columns = derive_outcomes(
        &reveal.server_seed,
        &reveal.client_seed,
        config.height,
        config.width,
    );

    Ok(RoundVerification {
        commitment_valid,
        bomb_columns,
        config: config.clone(),
    })
}

impl RoundVerification {
    /// Whether the round's fairness is confirmed.
    ///
    /// False means "this round's fairness could not be confirmed" and the
    /// reconstructed layout must not be presented as authoritative.
    pub fn is_confirmed(&self) -> bool {
        self.commitment_valid
    }

    /// Replay a player's picked columns against the bomb layout.
    ///
    /// Picks are consumed row by row from row 0; the replay stops at the
    /// first bomb hit or at the end of the picks, whichever comes first. The
    /// multiplier is read off the grid's payout ladder.
    pub fn replay_path(&self, picks: &[u32]) -> PathReplay {
        let mut rows_cleared = 0u32;
        let mut busted_at = None;

        for (row, pick) in picks.iter().enumerate().take(self.bomb_columns.len()) {
            if *pick == self.bomb_columns[row] {
                busted_at = Some(row as u32);
                break;
            }
            rows_cleared += 1;
        }

        let multiplier = if busted_at.is_some() {
            0.0
        } else {
            self.config.multiplier_after(rows_cleared)
        };

        PathReplay {
            rows_cleared,
            busted_at,
            multiplier,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
